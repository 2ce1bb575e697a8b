//! Community Ritual Rating
//!
//! Ratings are kept as a single running average weighted by the ritual's use
//! count. Individual ratings are not stored, so a submitted rating can never
//! be corrected or withdrawn.

use crate::shared::error::SharedError;
use crate::shared::validation::in_range;

/// Lowest accepted rating
pub const RATING_MIN: i32 = 1;
/// Highest accepted rating
pub const RATING_MAX: i32 = 5;

/// Fold a submitted rating into the running average.
///
/// `new = (current * uses + submitted) / (uses + 1)`
pub fn updated_rating(current: f64, uses_count: i64, submitted: i32) -> Result<f64, SharedError> {
    let submitted = in_range("rating", submitted, RATING_MIN, RATING_MAX)?;
    let uses = uses_count.max(0) as f64;
    Ok((current * uses + f64::from(submitted)) / (uses + 1.0))
}
