//! API integration tests
//!
//! Integration tests for all API endpoints

mod challenges_test;
mod marketplace_test;
mod mood_test;
mod rituals_test;
mod sessions_test;
mod stacks_test;
