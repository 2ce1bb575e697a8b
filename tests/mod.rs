//! Test suite for RitualOS
//!
//! Integration tests drive the full router with `tower::ServiceExt::oneshot`
//! against the in-memory store; `integration::database` runs the PostgreSQL
//! store when `DATABASE_URL` is set; property tests cover the accounting and
//! credential rules.

pub mod common;
pub mod property;
