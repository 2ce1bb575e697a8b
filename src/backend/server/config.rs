/**
 * Store Selection
 *
 * With a `database_url` the server connects to PostgreSQL and applies
 * migrations; connection or migration failures abort startup. Without one
 * it runs on the in-memory store, which loses everything on restart.
 */

use std::sync::Arc;

use crate::backend::store::{MemoryStore, PgStore, StoreHandle, StoreResult};
use crate::shared::config::AppConfig;

/// Build the store described by `config`
pub async fn load_store(config: &AppConfig) -> StoreResult<StoreHandle> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not persist.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    store.migrate().await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(store))
}
