//! Learning pace classification.
//!
//! The pace is recomputed from fresh inputs on every render. `now` is an
//! argument so the same inputs always give the same label.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Phases per week at or above which the pace is "Fast".
pub const FAST_PHASES_PER_WEEK: f64 = 1.5;

/// Phases per week at or above which the pace is "On Track".
pub const STEADY_PHASES_PER_WEEK: f64 = 0.5;

/// Pace tier. `Slow < Steady < Fast`; `Neutral` means no activity yet and
/// sits below every measured tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceTier {
    Neutral,
    Slow,
    Steady,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LearningPace {
    pub label: &'static str,
    pub tier: PaceTier,
    /// `None` when there is no recorded activity.
    pub phases_per_week: Option<f64>,
}

impl LearningPace {
    pub const JUST_STARTED: Self = Self {
        label: "Just Started",
        tier: PaceTier::Neutral,
        phases_per_week: None,
    };

    fn measured(phases_per_week: f64) -> Self {
        let (label, tier) = if phases_per_week >= FAST_PHASES_PER_WEEK {
            ("Fast", PaceTier::Fast)
        } else if phases_per_week >= STEADY_PHASES_PER_WEEK {
            ("On Track", PaceTier::Steady)
        } else {
            ("Take Your Time", PaceTier::Slow)
        };
        Self {
            label,
            tier,
            phases_per_week: Some(phases_per_week),
        }
    }
}

impl fmt::Display for LearningPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Whole days elapsed since `since`, never less than one.
pub fn days_since(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(since).num_days().max(1)
}

/// Classifies how quickly phases are being completed.
pub fn classify_pace(
    completed_phases: u32,
    last_activity: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> LearningPace {
    let Some(since) = last_activity else {
        return LearningPace::JUST_STARTED;
    };
    let days = days_since(since, now) as f64;
    let per_week = (f64::from(completed_phases) / days) * 7.0;
    LearningPace::measured(per_week)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn no_activity_is_just_started() {
        let pace = classify_pace(0, None, now());
        assert_eq!(pace.label, "Just Started");
        assert_eq!(pace.tier, PaceTier::Neutral);
    }

    #[test]
    fn same_day_activity_counts_as_one_day() {
        let pace = classify_pace(1, Some(now() - Duration::hours(3)), now());
        // 1 phase / 1 day * 7 = 7 per week
        assert_eq!(pace.tier, PaceTier::Fast);
        assert_eq!(pace.phases_per_week, Some(7.0));
    }

    #[test]
    fn future_activity_does_not_divide_by_zero() {
        let pace = classify_pace(2, Some(now() + Duration::days(5)), now());
        assert_eq!(pace.phases_per_week, Some(14.0));
    }

    #[test]
    fn thresholds_are_inclusive_at_lower_bound() {
        assert_eq!(LearningPace::measured(1.5).label, "Fast");
        assert_eq!(LearningPace::measured(1.49).label, "On Track");
        assert_eq!(LearningPace::measured(0.5).label, "On Track");
        assert_eq!(LearningPace::measured(0.49).label, "Take Your Time");
    }

    #[test]
    fn labels_follow_weekly_rate() {
        let week_ago = Some(now() - Duration::days(7));
        assert_eq!(classify_pace(2, week_ago, now()).label, "Fast");
        assert_eq!(classify_pace(1, week_ago, now()).label, "On Track");

        // 1 phase over 15 days is under half a phase per week
        let slow = classify_pace(1, Some(now() - Duration::days(15)), now());
        assert_eq!(slow.label, "Take Your Time");
    }

    #[test]
    fn zero_completed_with_activity_is_slow() {
        let pace = classify_pace(0, Some(now() - Duration::days(2)), now());
        assert_eq!(pace.tier, PaceTier::Slow);
    }

    #[test]
    fn partial_days_floor() {
        // 2.9 days floors to 2: 1 / 2 * 7 = 3.5
        let pace = classify_pace(1, Some(now() - Duration::hours(70)), now());
        assert_eq!(pace.phases_per_week, Some(3.5));
    }

    proptest! {
        #[test]
        fn just_started_regardless_of_now(secs in -1_000_000_000i64..4_000_000_000i64) {
            let when = Utc.timestamp_opt(secs, 0).unwrap();
            prop_assert_eq!(classify_pace(0, None, when), LearningPace::JUST_STARTED);
        }

        #[test]
        fn tier_is_monotonic_in_completed(days in 0i64..400, a in 0u32..200, b in 0u32..200) {
            let since = Some(now() - Duration::days(days));
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_tier = classify_pace(lo, since, now()).tier;
            let hi_tier = classify_pace(hi, since, now()).tier;
            prop_assert!(lo_tier <= hi_tier);
        }

        #[test]
        fn classification_is_idempotent(days in 0i64..400, done in 0u32..200) {
            let since = Some(now() - Duration::days(days));
            prop_assert_eq!(classify_pace(done, since, now()), classify_pace(done, since, now()));
        }
    }
}
