//! Backend Module
//!
//! The RitualOS HTTP server: thin axum handlers that resolve identity,
//! validate a request body, make one or two store calls and answer JSON.
//!
//! # Architecture
//!
//! - **`server`** - Initialization, application state, store selection
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Credential service, users, /auth handlers
//! - **`middleware`** - `AuthUser`, `JsonBody` and `PathId` extractors
//! - **`tracking`** - Rituals, sessions, mood, habit stacks, stats
//! - **`community`** - Challenges, circles, marketplace
//! - **`store`** - Repository traits, PostgreSQL and in-memory stores
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── tracking/       - Personal tracking handlers
//! ├── community/      - Shared/community handlers
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → router → `AuthUser` (401 on failure) → `JsonBody` (400 on a
//! malformed body) → handler → `Store` → JSON response or `BackendError`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request extractors
pub mod middleware;

/// Rituals, sessions, mood, stacks, stats
pub mod tracking;

/// Challenges, circles, marketplace
pub mod community;

/// Persistence interface and implementations
pub mod store;

pub use error::BackendError;
pub use server::create_app;
