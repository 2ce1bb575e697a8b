//! Authentication Module
//!
//! - `credentials` - `CredentialService`: password hashing and bearer tokens
//! - `passwords` - bcrypt hashing and verification
//! - `tokens` - JWT claims, issuing and verification
//! - `users` - the stored user record
//! - `handlers` - /auth/signup, /auth/login, /auth/me

pub mod credentials;
pub mod passwords;
pub mod tokens;
pub mod users;
pub mod handlers;

pub use credentials::{AuthenticatedUser, CredentialError, CredentialService};
