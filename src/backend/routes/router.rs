/**
 * Router Configuration
 *
 * Combines every route group into one router and adds the layers:
 * request tracing (`TraceLayer`) and CORS for browser clients.
 * Unknown paths answer 404 with the usual JSON error body.
 */

use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{
    configure_auth_routes, configure_community_routes, configure_tracking_routes,
};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_auth_routes(router);
    let router = configure_tracking_routes(router);
    let router = configure_community_routes(router);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any)
        .max_age(Duration::from_secs(60 * 60));

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
