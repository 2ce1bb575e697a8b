/**
 * Authentication Extractor
 *
 * `AuthUser` resolves the caller's identity from the `Authorization`
 * header before the handler body runs. Any failure (missing header, wrong
 * scheme, bad signature, expired token) rejects with 401, so a protected
 * handler never touches the store for an unauthenticated request.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::credentials::{AuthenticatedUser, CredentialService};
use crate::backend::error::BackendError;

/// Axum extractor for authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<CredentialService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let credentials = Arc::<CredentialService>::from_ref(state);
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match credentials.identity_from_header(header) {
            Some(user) => Ok(AuthUser(user)),
            None => {
                if header.is_none() {
                    tracing::warn!("Missing Authorization header");
                } else {
                    tracing::warn!("Rejected bearer token");
                }
                Err(BackendError::unauthorized("Unauthorized"))
            }
        }
    }
}
