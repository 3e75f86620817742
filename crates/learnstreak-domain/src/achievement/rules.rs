use super::codes;
use super::AchievementCode;
use crate::streak::StreakState;

/// Which streak counter a chapter-completion rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakCounter {
    Current,
    Longest,
}

/// Chapter-completion rules. Each matches one exact counter value: a streak
/// that skips past the value does not qualify.
const CHAPTER_COMPLETION_RULES: &[(StreakCounter, u32, &str)] = &[
    (StreakCounter::Current, 1, codes::FIRST_CHAPTER),
    (StreakCounter::Current, 7, codes::CONSISTENT_LEARNER),
    (StreakCounter::Current, 30, codes::MONTH_WARRIOR),
    (StreakCounter::Longest, 14, codes::CONSISTENT_LEARNER_X2),
];

/// Decides which badges a triggering event qualifies for.
/// Recording the unlock (and its idempotence) is up to the caller.
pub struct AchievementRules;

impl AchievementRules {
    /// Codes qualifying after an enrollment; `is_first_enrollment` must be
    /// computed before the new enrollment is stored.
    pub fn for_enrollment(is_first_enrollment: bool) -> Vec<AchievementCode> {
        if is_first_enrollment {
            vec![AchievementCode::from_string(codes::FIRST_COURSE_ENROLLED)]
        } else {
            Vec::new()
        }
    }

    /// Codes qualifying for the streak state written by a chapter completion
    pub fn for_chapter_completion(streak: &StreakState) -> Vec<AchievementCode> {
        CHAPTER_COMPLETION_RULES
            .iter()
            .filter(|(counter, value, _)| {
                let observed = match counter {
                    StreakCounter::Current => streak.current_streak(),
                    StreakCounter::Longest => streak.longest_streak(),
                };
                observed == *value
            })
            .map(|(_, _, code)| AchievementCode::from_string(code))
            .collect()
    }
}
