/**
 * Signup Handler
 *
 * POST /auth/signup
 *
 * # Registration Process
 *
 * 1. Validate email format and password length (8 characters to 72 bytes)
 * 2. Check if the email is already registered
 * 3. Hash the password on the blocking pool
 * 4. Create the user
 * 5. Issue a token and return it with the user
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::credentials::{CredentialError, CredentialService};
use crate::backend::auth::passwords::MAX_PASSWORD_BYTES;
use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::users::{is_valid_email, normalize_email, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::JsonBody;
use crate::backend::store::StoreHandle;
use crate::shared::validation::{optional_text, required, required_text};

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, malformed email, or short password
/// * `409 Conflict` - The email is already registered
pub async fn signup(
    State(store): State<StoreHandle>,
    State(credentials): State<Arc<CredentialService>>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let email = normalize_email(&required_text("email", request.email)?);
    let password = required("password", request.password)?;

    if !is_valid_email(&email) {
        tracing::warn!("Invalid email format: {}", email);
        return Err(BackendError::validation("email", "Invalid email format"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(BackendError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(CredentialError::PasswordTooLong(password.len()).into());
    }
    let name = optional_text(request.name)
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

    if store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict("Email already registered"));
    }

    let password_hash = credentials.hash_blocking(password).await?;
    let user = User::new(email, name, password_hash);
    // A concurrent signup can still win the race; the store rejects the second insert
    store.create_user(&user).await.map_err(|e| match e {
        crate::backend::store::StoreError::Conflict(_) => {
            BackendError::conflict("Email already registered")
        }
        other => other.into(),
    })?;

    let token = credentials.issue_token(user.id, &user.email)?;
    tracing::info!("User created successfully: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
