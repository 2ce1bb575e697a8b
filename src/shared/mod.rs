//! Shared Module
//!
//! Types and pure logic that do not depend on the HTTP server or the
//! database: the data model with its request/response bodies, validation
//! helpers, the accounting rules, and configuration.
//!
//! # Overview
//!
//! - **`tracking`** - rituals, sessions, mood entries, habit stacks
//! - **`community`** - challenges, circles, marketplace templates
//! - **`accounting`** - streaks, points, running-average ratings
//! - **`validation`** - request field helpers
//! - **`error`** - `SharedError`
//! - **`config`** - `AppConfig` and its builder

/// Shared error types
pub mod error;

/// Request field validation
pub mod validation;

/// Streak, points and rating arithmetic
pub mod accounting;

/// Personal tracking data model
pub mod tracking;

/// Community data model
pub mod community;

/// Application configuration
pub mod config;

pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
