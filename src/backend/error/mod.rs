//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and conversions from lower layers
//! └── conversion.rs - `IntoResponse` implementation
//! ```
//!
//! # Error Kinds
//!
//! | Variant        | Status | Raised when                                  |
//! |----------------|--------|----------------------------------------------|
//! | `Validation`   | 400    | a body field is missing, malformed, or out of range |
//! | `Unauthorized` | 401    | the bearer token is missing or invalid, or login fails |
//! | `NotFound`     | 404    | a referenced record is absent or not the caller's |
//! | `Conflict`     | 409    | a unique record already exists               |
//! | `Internal`     | 500    | the store or a runtime step failed           |
//!
//! Internal errors are logged with their detail; the client only ever sees
//! `{"error": "Internal server error"}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
