mod evaluator;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub use evaluator::{calendar_days_between, StreakEvaluation, StreakEvaluator};

/// Daily learning streak carried on the user record.
///
/// Only [`StreakEvaluator`] produces new values; everything else restores
/// it from storage and reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    current_streak: u32,
    longest_streak: u32,
    last_completion_date: Option<DateTime<Utc>>,
    streak_start_date: Option<DateTime<Utc>>,
}

impl StreakState {
    /// State of a user who has never completed anything
    pub fn empty() -> Self {
        Self::default()
    }

    /// Restore streak state from persistence
    pub fn restore(
        current_streak: u32,
        longest_streak: u32,
        last_completion_date: Option<DateTime<Utc>>,
        streak_start_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            current_streak,
            longest_streak,
            last_completion_date,
            streak_start_date,
        }
    }

    /// Whether the last credited completion falls on the same calendar day
    /// as `now` in the given timezone.
    pub fn is_credited_on<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> bool {
        self.last_completion_date
            .is_some_and(|last| calendar_days_between(last, now, tz) == 0)
    }

    // Getters
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn last_completion_date(&self) -> Option<DateTime<Utc>> {
        self.last_completion_date
    }

    pub fn streak_start_date(&self) -> Option<DateTime<Utc>> {
        self.streak_start_date
    }
}
