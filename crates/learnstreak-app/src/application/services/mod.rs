mod achievement_service;
mod enrollment_service;
mod learning_progress_service;
mod streak_service;
mod user_service;


pub use achievement_service::AchievementService;
pub use enrollment_service::EnrollmentService;
pub use learning_progress_service::LearningProgressService;
pub use streak_service::StreakService;
pub use user_service::UserService;
