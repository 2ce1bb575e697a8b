//! RitualOS - Main Library
//!
//! RitualOS is a habit-tracking backend: users sign up, log daily rituals and
//! sessions, track mood, join challenges, gather in circles, and adopt rituals
//! shared by the community.
//!
//! # Module Structure
//!
//! - **`shared`** - Data model, validation, accounting rules, configuration.
//!   Nothing here touches the network or the database.
//!
//! - **`backend`** - The Axum HTTP server
//!   - Credential service (bcrypt passwords, JWT bearer tokens)
//!   - Request handlers per resource
//!   - Persistence interface with PostgreSQL and in-memory stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use ritualos::backend::server::init::create_app;
//! use ritualos::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::error::BackendError` for everything a handler can return; it
//!   renders as `{"error": "..."}` with the matching status code

/// Shared types and pure logic
pub mod shared;

/// Backend server-side code
pub mod backend;
