//! Store errors

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An update or delete targeted a row that does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A uniqueness constraint rejected the write
    #[error("{0} already exists")]
    Conflict(&'static str),

    /// A stored value could not be mapped back into the model
    #[error("corrupt {entity} record: {detail}")]
    Corrupt { entity: &'static str, detail: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Map a sqlx error, turning unique-constraint violations into `Conflict`
    pub fn from_write(entity: &'static str, err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict(entity),
            _ => StoreError::Database(err),
        }
    }
}
