//! Streak Computation
//!
//! A streak is the number of consecutive calendar days, ending today, with at
//! least one completed session. Days are taken in the timezone of the `now`
//! value passed in, so the caller decides where "midnight" is.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current and longest streak for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

impl StreakSummary {
    /// Compute both figures from completion timestamps and the stored counter
    pub fn compute<I, Tz>(completions: I, now: &DateTime<Tz>, stored: u32) -> Self
    where
        I: IntoIterator<Item = Option<DateTime<Utc>>>,
        Tz: TimeZone,
    {
        let current = current_streak(completions, now);
        Self {
            current,
            longest: longest_streak(current, stored),
        }
    }
}

/// Count consecutive days with a completion, walking back from `now`'s day.
///
/// Sessions that were never completed (`None`) are ignored and several
/// completions on the same day count once. If today has no completion the
/// streak is zero.
pub fn current_streak<I, Tz>(completions: I, now: &DateTime<Tz>) -> u32
where
    I: IntoIterator<Item = Option<DateTime<Utc>>>,
    Tz: TimeZone,
{
    let tz = now.timezone();
    let days: BTreeSet<NaiveDate> = completions
        .into_iter()
        .flatten()
        .map(|completed| completed.with_timezone(&tz).date_naive())
        .collect();

    let mut day = now.date_naive();
    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Longest streak, approximated from the current streak and the stored counter.
///
/// This is not a scan of the full history: a longer run that ended before the
/// stored counter was last written is not seen.
pub fn longest_streak(current: u32, stored: u32) -> u32 {
    current.max(stored)
}
