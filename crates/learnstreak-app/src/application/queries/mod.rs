mod achievement_queries;
mod streak_queries;

pub use achievement_queries::AchievementQueryService;
pub use streak_queries::StreakQueryService;
