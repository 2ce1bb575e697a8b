//! Common test utilities and helpers
//!
//! - `app` - `TestApp`, a router over a fresh in-memory store
//! - `auth_helpers` - signing users up and forging tokens
//! - `assertions` - status/body assertion helpers
//! - `database` - PostgreSQL store fixtures, gated on `DATABASE_URL`

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
