mod achievement_repo;
mod enrollment_repo;
mod user_repo;

pub use achievement_repo::SqliteAchievementRepository;
pub use enrollment_repo::SqliteEnrollmentRepository;
pub use user_repo::SqliteUserRepository;
