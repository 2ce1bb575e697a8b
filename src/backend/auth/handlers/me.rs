/**
 * Get Current User Handler
 *
 * GET /auth/me. Identity comes from the `AuthUser` extractor; a valid token
 * for a user that no longer exists answers 404.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::StoreHandle;

pub async fn get_me(
    State(store): State<StoreHandle>,
    AuthUser(identity): AuthUser,
) -> Result<Json<MeResponse>, BackendError> {
    let user = store
        .find_user_by_id(identity.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", identity.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(MeResponse { user: user.into() }))
}
