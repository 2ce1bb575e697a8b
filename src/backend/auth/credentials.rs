/**
 * Credential Service
 *
 * Bundles password hashing and bearer tokens behind one handle built from
 * `AppConfig` at startup. Handlers reach it through `AppState`; nothing
 * reads the signing secret from a global.
 */

use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::tokens::{Claims, TokenSigner};
use crate::shared::config::AppConfig;

/// Credential errors
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password must not be empty")]
    EmptyPassword,

    /// bcrypt only reads the first 72 bytes; longer input is refused, not truncated
    #[error("password is {0} bytes, more than bcrypt accepts")]
    PasswordTooLong(usize),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Authenticated user data extracted from a bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Clone)]
pub struct CredentialService {
    tokens: TokenSigner,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(secret: &str, bcrypt_cost: u32) -> Self {
        Self {
            tokens: TokenSigner::new(secret.as_bytes()),
            bcrypt_cost,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.bcrypt_cost)
    }

    pub fn hash(&self, password: &str) -> Result<String, CredentialError> {
        hash_password(password, self.bcrypt_cost)
    }

    pub fn verify(&self, password: &str, hash: &str) -> bool {
        verify_password(password, hash)
    }

    /// `hash` on the blocking pool
    pub async fn hash_blocking(&self, password: String) -> Result<String, CredentialError> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || hash_password(&password, cost)).await?
    }

    /// `verify` on the blocking pool
    pub async fn verify_blocking(&self, password: String, hash: String) -> bool {
        match tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification task failed: {:?}", e);
                false
            }
        }
    }

    pub fn issue_token(&self, user_id: Uuid, email: &str) -> Result<String, CredentialError> {
        Ok(self.tokens.issue(user_id, email)?)
    }

    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        self.tokens.verify(token)
    }

    /// Resolve an `Authorization` header value of the form `Bearer <token>`
    pub fn identity_from_header(&self, header: Option<&str>) -> Option<AuthenticatedUser> {
        let token = header?.strip_prefix("Bearer ")?.trim();
        let claims = self.verify_token(token)?;
        Some(AuthenticatedUser {
            user_id: claims.user_id()?,
            email: claims.email,
        })
    }
}
