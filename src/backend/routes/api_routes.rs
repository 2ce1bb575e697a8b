/**
 * API Route Configuration
 *
 * ## Authentication
 * - `POST /auth/signup`, `POST /auth/login`, `GET /auth/me`
 *
 * ## Tracking (bearer token required)
 * - `/rituals`, `/rituals/{id}`
 * - `/sessions`, `/sessions/{id}`, `/sessions/{id}/complete`
 * - `/mood`
 * - `/stacks`, `/stacks/{id}`
 * - `/stats`
 *
 * ## Community
 * - `/challenges` (GET public), `/challenges/join`, `/challenges/my`,
 *   `/challenges/{id}/checkin`, `/challenges/{id}/abandon`
 * - `/circles`, `/circles/{id}/join`, `/circles/{id}/leave`
 * - `/marketplace` (GET public), `/marketplace/rate`, `/marketplace/use`
 *
 * Authentication is enforced per handler by the `AuthUser` extractor, so
 * public and protected methods can share a path.
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, signup};
use crate::backend::community::{challenges, circles, marketplace};
use crate::backend::server::state::AppState;
use crate::backend::tracking::{mood, rituals, sessions, stacks, stats};

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
}

pub fn configure_tracking_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/rituals",
            get(rituals::list_rituals).post(rituals::create_ritual),
        )
        .route(
            "/rituals/{id}",
            get(rituals::get_ritual)
                .put(rituals::update_ritual)
                .delete(rituals::delete_ritual),
        )
        .route(
            "/sessions",
            get(sessions::list_sessions).post(sessions::start_session),
        )
        .route("/sessions/{id}", delete(sessions::delete_session))
        .route("/sessions/{id}/complete", post(sessions::complete_session))
        .route("/mood", get(mood::list_mood).post(mood::log_mood))
        .route("/stacks", get(stacks::list_stacks).post(stacks::create_stack))
        .route("/stacks/{id}", delete(stacks::delete_stack))
        .route("/stats", get(stats::get_stats))
}

pub fn configure_community_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/challenges",
            get(challenges::list_challenges).post(challenges::create_challenge),
        )
        .route("/challenges/join", post(challenges::join_challenge))
        .route("/challenges/my", get(challenges::my_challenges))
        .route("/challenges/{id}/checkin", post(challenges::check_in))
        .route("/challenges/{id}/abandon", post(challenges::abandon_challenge))
        .route(
            "/circles",
            get(circles::list_circles).post(circles::create_circle),
        )
        .route("/circles/{id}/join", post(circles::join_circle))
        .route("/circles/{id}/leave", post(circles::leave_circle))
        .route(
            "/marketplace",
            get(marketplace::list_marketplace).post(marketplace::publish_ritual),
        )
        .route("/marketplace/rate", post(marketplace::rate_ritual))
        .route("/marketplace/use", post(marketplace::use_ritual))
}
