//! Property tests for streaks, points and ratings

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use ritualos::shared::accounting::{
    award_points, current_streak, longest_streak, updated_rating, RATING_MAX, RATING_MIN,
};

fn noon() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

proptest! {
    #[test]
    fn prop_streak_counts_run_ending_today(run in 0u32..60, gap in 1u32..5, older in 0u32..20) {
        let now = noon();
        let mut completions: Vec<_> = (0..run)
            .map(|day| Some(now - Duration::days(i64::from(day))))
            .collect();
        // Days before the gap never count
        completions.extend(
            (0..older).map(|day| Some(now - Duration::days(i64::from(run + gap + day)))),
        );
        // Unfinished sessions are ignored
        completions.push(None);

        prop_assert_eq!(current_streak(completions, &now), run);
    }

    #[test]
    fn prop_same_day_completions_count_once(run in 1u32..30, repeats in 1usize..4) {
        let now = noon();
        let completions: Vec<_> = (0..run)
            .flat_map(|day| {
                let at = now - Duration::days(i64::from(day));
                (0..repeats).map(move |i| Some(at - Duration::minutes(i as i64)))
            })
            .collect();

        prop_assert_eq!(current_streak(completions, &now), run);
    }

    #[test]
    fn prop_longest_at_least_current(current in 0u32..1000, stored in 0u32..1000) {
        let longest = longest_streak(current, stored);
        prop_assert!(longest >= current);
        prop_assert!(longest >= stored);
    }

    #[test]
    fn prop_rating_stays_in_range(
        submissions in proptest::collection::vec(RATING_MIN..=RATING_MAX, 1..50),
    ) {
        let mut rating = 0.0;
        for (uses, submitted) in submissions.into_iter().enumerate() {
            rating = updated_rating(rating, uses as i64, submitted).unwrap();
            prop_assert!(rating >= f64::from(RATING_MIN) - 1e-9);
            prop_assert!(rating <= f64::from(RATING_MAX) + 1e-9);
        }
    }

    #[test]
    fn prop_rating_rejects_out_of_range(current in 1.0f64..=5.0, uses in 0i64..100, submitted in any::<i32>()) {
        prop_assume!(!(RATING_MIN..=RATING_MAX).contains(&submitted));
        prop_assert!(updated_rating(current, uses, submitted).is_err());
    }

    #[test]
    fn prop_award_points_monotonic(total in any::<i64>().prop_map(|t| t.max(0)), points in any::<i32>()) {
        let awarded = award_points(total, points);
        prop_assert!(awarded >= total);
        if points >= 0 {
            prop_assert_eq!(awarded, total.saturating_add(i64::from(points)));
        }
    }
}
