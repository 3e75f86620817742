pub mod codes;
mod repository;
mod rules;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

pub use repository::AchievementRepository;
pub use rules::{AchievementRules, StreakCounter};

/// Stable badge identifier, e.g. `CONSISTENT_LEARNER`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AchievementCode(String);

impl AchievementCode {
    pub fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AchievementCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog entry describing a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    code: AchievementCode,
    title: String,
    description: String,
    icon: String,
}

impl AchievementDefinition {
    pub fn new(
        code: &str,
        title: &str,
        description: &str,
        icon: &str,
    ) -> Result<Self, DomainError> {
        let well_formed = code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if code.is_empty() || !well_formed {
            return Err(DomainError::Validation(format!(
                "Achievement code must be SCREAMING_SNAKE_CASE: '{}'",
                code
            )));
        }

        if title.is_empty() {
            return Err(DomainError::Validation(
                "Achievement title cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            code: AchievementCode::from_string(code),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        })
    }

    /// Restore definition from persistence
    pub fn restore(code: String, title: String, description: String, icon: String) -> Self {
        Self {
            code: AchievementCode(code),
            title,
            description,
            icon,
        }
    }

    pub fn code(&self) -> &AchievementCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// A badge held by a user. At most one exists per `(user_id, code)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementUnlock {
    pub user_id: UserId,
    pub code: AchievementCode,
    pub unlocked_at: DateTime<Utc>,
}

impl AchievementUnlock {
    pub fn new(user_id: UserId, code: AchievementCode) -> Self {
        Self {
            user_id,
            code,
            unlocked_at: Utc::now(),
        }
    }
}

/// Unlocked badge joined with its catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub definition: AchievementDefinition,
    pub unlocked_at: DateTime<Utc>,
}

/// Result of an unlock attempt.
///
/// `UnknownCode` and `UnknownUser` point at a caller or catalog
/// misconfiguration and are not errors for the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockStatus {
    AlreadyUnlocked,
    NewlyUnlocked,
    UnknownCode,
    UnknownUser,
}

impl UnlockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnlockStatus::AlreadyUnlocked => "already_unlocked",
            UnlockStatus::NewlyUnlocked => "newly_unlocked",
            UnlockStatus::UnknownCode => "unknown_code",
            UnlockStatus::UnknownUser => "unknown_user",
        }
    }
}

impl std::fmt::Display for UnlockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
