use serde::Serialize;
use serde_json::Value;

use crate::application::achievement_seeder::seed_builtin_achievements;
use crate::presentation::cli::{Command, UserCommand};
use crate::presentation::state::AppState;
use learnstreak_domain::shared::DomainError;

/// Run one CLI command against the assembled state and return its JSON output
pub async fn execute(state: &AppState, command: Command) -> Result<Value, DomainError> {
    match command {
        Command::Seed => {
            let seeded = seed_builtin_achievements(state.repositories.achievement.clone()).await?;
            let catalog = state.queries.achievement.list_catalog().await?;
            Ok(serde_json::json!({
                "seeded": seeded,
                "catalog_size": catalog.len(),
            }))
        }
        Command::User {
            command: UserCommand::Ensure(args),
        } => to_json(
            state
                .services
                .user
                .ensure_user(&args.email, &args.name)
                .await?,
        ),
        Command::Enroll(args) => to_json(
            state
                .services
                .enrollment
                .enroll(&args.user, &args.course)
                .await?,
        ),
        Command::Enrollment(args) => to_json(
            state
                .services
                .enrollment
                .check_enrollment(&args.user, &args.course)
                .await?,
        ),
        Command::Complete(args) => to_json(
            state
                .services
                .learning_progress
                .complete_chapter(&args.user, &args.course, args.chapters)
                .await?,
        ),
        Command::Streak(args) => to_json(
            state
                .queries
                .streak
                .get_streak_summary(&args.user)
                .await?,
        ),
        Command::Unlock(args) => to_json(
            state
                .services
                .achievement
                .unlock_achievement(&args.user, &args.code)
                .await?,
        ),
        Command::Achievements(args) => {
            to_json(state.queries.achievement.list_unlocked(&args.user).await?)
        }
        Command::Catalog => to_json(state.queries.achievement.list_catalog().await?),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, DomainError> {
    serde_json::to_value(value)
        .map_err(|e| DomainError::Serialization(format!("Failed to encode output: {}", e)))
}
