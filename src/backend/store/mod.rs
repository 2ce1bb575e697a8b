//! Persistence Interface
//!
//! Handlers never talk to a database directly. They go through the
//! repository traits in `repositories`, bundled into the `Store` trait, and
//! receive an `Arc<dyn Store>` from the application state.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - StoreError
//! ├── repositories.rs - Per-entity repository traits and `Store`
//! ├── memory.rs       - In-memory implementation (development, tests)
//! └── postgres/       - PostgreSQL implementation via sqlx
//! ```
//!
//! # Guarantees
//!
//! Each method is a single write or read and is atomic on its own. Nothing
//! here spans several writes: flows such as "increment uses, then create a
//! ritual" are two calls and the first is not rolled back if the second
//! fails. Concurrent updates to the same row are last-write-wins.

pub mod error;
pub mod repositories;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repositories::{
    ChallengeRepository, CircleRepository, HabitStackRepository, MarketplaceRepository,
    MoodRepository, RitualRepository, SessionRepository, Store, UserRepository,
};

/// Shared handle to whichever store the server runs on
pub type StoreHandle = Arc<dyn Store>;
