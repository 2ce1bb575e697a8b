//! Community Handlers
//!
//! - `challenges` - challenge definitions, enrollment, daily check-ins
//! - `circles` - small groups with an owner
//! - `marketplace` - shared ritual templates that others rate and adopt
//!
//! The challenge list and the marketplace list are public reads; every
//! other handler takes `AuthUser`.

pub mod challenges;
pub mod circles;
pub mod marketplace;
