/**
 * Login Handler
 *
 * POST /auth/login
 *
 * Unknown emails and wrong passwords both answer 401 with the same message.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::CredentialService;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::users::normalize_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::store::StoreHandle;
use crate::shared::validation::{required, required_text};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn login(
    State(store): State<StoreHandle>,
    State(credentials): State<Arc<CredentialService>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let email = normalize_email(&required_text("email", request.email)?);
    let password = required("password", request.password)?;

    let user = store.find_user_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("Login for unknown email: {}", email);
        BackendError::unauthorized(INVALID_CREDENTIALS)
    })?;

    if !credentials
        .verify_blocking(password, user.password_hash.clone())
        .await
    {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = credentials.issue_token(user.id, &user.email)?;
    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
