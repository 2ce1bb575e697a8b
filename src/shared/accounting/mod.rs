//! Accounting Module
//!
//! The small amount of arithmetic the rest of the system leans on:
//!
//! - `streak` - consecutive-day completion streaks
//! - `points` - challenge point accrual
//! - `rating` - running-average rating for community rituals
//!
//! Everything here is pure: callers pass in timestamps and counters read from
//! the store and write the results back themselves.

pub mod streak;
pub mod points;
pub mod rating;

pub use streak::{current_streak, longest_streak, StreakSummary};
pub use points::award_points;
pub use rating::{updated_rating, RATING_MAX, RATING_MIN};
