//! Middleware Module
//!
//! Extractors that run before a handler body:
//!
//! - **`auth`** - `AuthUser`, resolves the bearer token or rejects with 401
//! - **`extract`** - `JsonBody`, `OptionalJsonBody` and `PathId`, which reject with 400

pub mod auth;
pub mod extract;

pub use auth::AuthUser;
pub use extract::{JsonBody, OptionalJsonBody, PathId};
