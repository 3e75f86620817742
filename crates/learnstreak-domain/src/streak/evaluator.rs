use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::StreakState;

/// Outcome of folding one completion into a streak
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakEvaluation {
    pub state: StreakState,
    /// Current streak matches the longest one and is past the first day
    pub is_new_record: bool,
    /// The prior state was already credited for the same calendar day
    pub credited_today: bool,
}

/// Whole calendar days from `earlier` to `later` once time of day is dropped.
///
/// Negative when `later` falls on an earlier date (clock skew, backdated events).
pub fn calendar_days_between<Tz: TimeZone>(
    earlier: DateTime<Utc>,
    later: DateTime<Utc>,
    tz: &Tz,
) -> i64 {
    let earlier_day = earlier.with_timezone(tz).date_naive();
    let later_day = later.with_timezone(tz).date_naive();
    (later_day - earlier_day).num_days()
}

/// Domain service computing day-over-day learning streaks.
/// Pure computation; persisting the result is the caller's job.
pub struct StreakEvaluator;

impl StreakEvaluator {
    /// Evaluate a completion at `now` using the process's local calendar
    pub fn evaluate(prior: &StreakState, now: DateTime<Utc>) -> StreakEvaluation {
        Self::evaluate_in(prior, now, &Local)
    }

    /// Evaluate a completion at `now`, bucketing days in `tz`
    pub fn evaluate_in<Tz: TimeZone>(
        prior: &StreakState,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> StreakEvaluation {
        let days_diff = prior
            .last_completion_date()
            .map(|last| calendar_days_between(last, now, tz));

        let current_streak = match days_diff {
            None => 1,
            Some(0) => prior.current_streak(),
            Some(1) => prior.current_streak().saturating_add(1),
            // A gap, or a completion dated before the last one
            Some(_) => 1,
        };
        let longest_streak = prior.longest_streak().max(current_streak);

        // The start date is stamped by the first completion and survives resets
        let streak_start_date = prior.streak_start_date().or(Some(now));

        StreakEvaluation {
            state: StreakState::restore(current_streak, longest_streak, Some(now), streak_start_date),
            is_new_record: current_streak == longest_streak && current_streak > 1,
            credited_today: days_diff == Some(0),
        }
    }

    /// Whether `state` has already been credited on the local calendar day of `now`
    pub fn is_completed_today(state: &StreakState, now: DateTime<Utc>) -> bool {
        state.is_credited_on(now, &Local)
    }
}
