//! Property-based tests

mod accounting_proptest;
mod credentials_proptest;
