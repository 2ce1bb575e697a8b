/**
 * Backend Error Types
 *
 * `BackendError` is the single error type handlers return. Errors from the
 * shared layer, the credential service and the store convert into it with
 * `?`, picking the closest HTTP status.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::credentials::CredentialError;
use crate::backend::auth::passwords::MAX_PASSWORD_BYTES;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message returned to clients for any 500
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or invalid input
    #[error("{message}")]
    Validation {
        /// The offending field
        field: String,
        /// Client-facing message naming the field
        message: String,
    },

    /// Missing, malformed or expired credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Referenced entity absent, or not owned by the caller
    #[error("{0}")]
    NotFound(String),

    /// Duplicate resource
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure; the detail is only logged
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message that may be shown to the client
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::Validation { field, message },
            SharedError::SerializationError { message } => Self::Validation {
                field: "body".to_string(),
                message,
            },
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(entity) => Self::NotFound(format!("{} not found", entity)),
            StoreError::Conflict(entity) => Self::Conflict(format!("{} already exists", entity)),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<CredentialError> for BackendError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::EmptyPassword => Self::validation("password", "password is required"),
            CredentialError::PasswordTooLong(_) => Self::validation(
                "password",
                format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
            ),
            other => Self::Internal(other.to_string()),
        }
    }
}
