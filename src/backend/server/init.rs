/**
 * Server Initialization
 *
 * 1. Build the credential service from configuration
 * 2. Load the store (PostgreSQL or in-memory)
 * 3. Create the router with all routes and layers
 */

use axum::Router;

use crate::backend::auth::credentials::CredentialService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::{StoreHandle, StoreResult};
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> StoreResult<Router> {
    tracing::info!("Initializing RitualOS backend server");
    let store = load_store(config).await?;
    Ok(create_app_with_store(config, store))
}

/// Build the application on an existing store
pub fn create_app_with_store(config: &AppConfig, store: StoreHandle) -> Router {
    let app_state = AppState::new(store, CredentialService::from_config(config));
    create_router(app_state)
}
