/**
 * Request Extractors
 *
 * Wrappers around axum's `Json` and `Path` whose rejections are
 * `BackendError`s, so a malformed body or id answers 400 with the usual
 * `{"error": ...}` body instead of axum's plain-text 422.
 */

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Client-facing message for any body that cannot be decoded
pub const INVALID_BODY: &str = "Invalid request body";

/// Matches axum's default body limit
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// JSON request body
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(BackendError::validation("body", INVALID_BODY))
            }
        }
    }
}

/// JSON request body that may be left out entirely.
///
/// An empty body yields `T::default()`; anything else must be valid JSON
/// with a JSON content type, as for `JsonBody`.
#[derive(Debug, Clone, Default)]
pub struct OptionalJsonBody<T>(pub T);

impl<S, T> FromRequest<S> for OptionalJsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, BODY_LIMIT).await.map_err(|e| {
            tracing::warn!("Unreadable request body: {}", e);
            BackendError::validation("body", INVALID_BODY)
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJsonBody(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        Ok(OptionalJsonBody(value))
    }
}

/// `{id}` path segment parsed as a UUID
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub Uuid);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| PathId(id))
            .map_err(|_| BackendError::validation("id", "id must be a UUID"))
    }
}
