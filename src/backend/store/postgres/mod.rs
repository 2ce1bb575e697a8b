/**
 * PostgreSQL Store
 *
 * `PgStore` implements every repository trait on a sqlx connection pool.
 * Each trait lives in its own file; `rows` maps result rows back into the
 * shared model types.
 *
 * # Schema
 *
 * Tables are created by the migrations in `migrations/`, applied with
 * `PgStore::migrate` at startup.
 */

mod rows;
mod users;
mod rituals;
mod sessions;
mod mood;
mod challenges;
mod circles;
mod marketplace;
mod stacks;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::backend::store::StoreResult;

/// Upper bound on pooled connections
pub const MAX_CONNECTIONS: u32 = 10;

/// sqlx-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool for `database_url`
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// `NotFound` when a write touched no rows
fn expect_affected(
    result: sqlx::postgres::PgQueryResult,
    entity: &'static str,
) -> StoreResult<()> {
    if result.rows_affected() == 0 {
        Err(crate::backend::store::StoreError::NotFound(entity))
    } else {
        Ok(())
    }
}
