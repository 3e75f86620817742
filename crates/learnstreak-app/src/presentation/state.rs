use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::queries::{AchievementQueryService, StreakQueryService};
use crate::application::services::{
    AchievementService, EnrollmentService, LearningProgressService, StreakService, UserService,
};
use learnstreak_domain::achievement::AchievementRepository;
use learnstreak_domain::enrollment::EnrollmentRepository;
use learnstreak_domain::user::UserRepository;

pub struct Runtime {
    pub pool: Arc<SqlitePool>,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub achievement: Arc<dyn AchievementRepository>,
    pub enrollment: Arc<dyn EnrollmentRepository>,
}

pub struct Services {
    pub user: Arc<UserService>,
    pub streak: Arc<StreakService>,
    pub achievement: Arc<AchievementService>,
    pub enrollment: Arc<EnrollmentService>,
    pub learning_progress: Arc<LearningProgressService>,
}

pub struct Queries {
    pub streak: Arc<StreakQueryService>,
    pub achievement: Arc<AchievementQueryService>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
}
