use serde::{Deserialize, Serialize};

/// Result of crediting a completion to the user's streak
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakUpdateDto {
    pub user_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completion_date: Option<String>, // RFC 3339
    pub is_new_record: bool,
    pub credited_today: bool,
}

/// Streak card shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakSummaryDto {
    pub user_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completion_date: Option<String>, // RFC 3339
    pub streak_start_date: Option<String>,    // RFC 3339
    pub completed_today: bool,
}
