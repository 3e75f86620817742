use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::achievement_seeder::seed_builtin_achievements;
use crate::application::queries::{AchievementQueryService, StreakQueryService};
use crate::application::services::{
    AchievementService, EnrollmentService, LearningProgressService, StreakService, UserService,
};
use crate::presentation::state::{AppState, Queries, Repositories, Runtime, Services};
use learnstreak_domain::achievement::AchievementRepository;
use learnstreak_domain::enrollment::EnrollmentRepository;
use learnstreak_domain::shared::DomainError;
use learnstreak_domain::user::UserRepository;
use learnstreak_infrastructure::config::AppConfig;
use learnstreak_infrastructure::persistence::{
    repositories::{SqliteAchievementRepository, SqliteEnrollmentRepository, SqliteUserRepository},
    Database,
};

/// Open the configured database and wire every service around it
pub async fn build_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    info!("Database path: {}", config.database_path.display());

    info!("🔌 Connecting to database...");
    let started_at = Instant::now();
    let database = Database::from_config(config).await?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    assemble(database).await
}

/// Run migrations and seeding on an open database, then wire the services
pub async fn assemble(database: Database) -> Result<AppState, DomainError> {
    let startup_started_at = Instant::now();

    info!("🔄 Running migrations...");
    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let pool = Arc::new(database.pool().clone());

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let achievement_repo = Arc::new(SqliteAchievementRepository::new(pool.clone()))
        as Arc<dyn AchievementRepository>;
    let enrollment_repo = Arc::new(SqliteEnrollmentRepository::new(pool.clone()))
        as Arc<dyn EnrollmentRepository>;

    info!("🌱 Seeding built-in achievements...");
    let started_at = Instant::now();
    let seeded = seed_builtin_achievements(achievement_repo.clone()).await?;
    info!(
        "✓ Built-in achievements seeded: {} new ({}ms)",
        seeded,
        started_at.elapsed().as_millis()
    );

    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let streak_service = Arc::new(StreakService::new(user_repo.clone()));
    let achievement_service = Arc::new(AchievementService::new(
        achievement_repo.clone(),
        user_repo.clone(),
    ));
    let enrollment_service = Arc::new(EnrollmentService::new(
        enrollment_repo.clone(),
        user_repo.clone(),
        achievement_service.clone(),
    ));
    let learning_progress_service = Arc::new(LearningProgressService::new(
        enrollment_repo.clone(),
        streak_service.clone(),
        achievement_service.clone(),
    ));

    let streak_queries = Arc::new(StreakQueryService::new(user_repo.clone()));
    let achievement_queries = Arc::new(AchievementQueryService::new(achievement_repo.clone()));

    info!(
        "✓ App state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        runtime: Runtime { pool },
        repositories: Repositories {
            user: user_repo,
            achievement: achievement_repo,
            enrollment: enrollment_repo,
        },
        services: Services {
            user: user_service,
            streak: streak_service,
            achievement: achievement_service,
            enrollment: enrollment_service,
            learning_progress: learning_progress_service,
        },
        queries: Queries {
            streak: streak_queries,
            achievement: achievement_queries,
        },
    })
}
