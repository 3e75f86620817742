use serde::{Deserialize, Serialize};

use learnstreak_domain::achievement::UnlockStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockResultDto {
    pub user_id: String,
    pub code: String,
    pub status: UnlockStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDto {
    pub code: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedAchievementDto {
    pub code: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: String, // RFC 3339
}
