//! PostgreSQL store tests
//!
//! Skipped unless `DATABASE_URL` points at a database the tests may migrate.
