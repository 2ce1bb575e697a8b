//! Point Accrual
//!
//! Completing a challenge awards its fixed point value. Levels are stored on
//! the user but never derived from points here.

/// Add a challenge's points to a running total, saturating at `i64::MAX`.
///
/// Negative point values are treated as zero.
pub fn award_points(total_points: i64, challenge_points: i32) -> i64 {
    total_points.saturating_add(i64::from(challenge_points.max(0)))
}
