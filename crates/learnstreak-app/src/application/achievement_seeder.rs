use std::sync::Arc;

use learnstreak_domain::achievement::{AchievementDefinition, AchievementRepository};
use learnstreak_domain::shared::DomainError;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct BuiltinAchievementConfig {
    code: String,
    title: String,
    description: String,
    icon: String,
}

fn builtin_achievement_configs() -> Result<Vec<BuiltinAchievementConfig>, DomainError> {
    const RAW_CONFIG: &str =
        include_str!("../../../../config/achievements/builtin_achievements.json");
    serde_json::from_str(RAW_CONFIG).map_err(|e| {
        DomainError::Serialization(format!("Failed to parse builtin achievements: {e}"))
    })
}

/// Ensure the built-in catalog exists in the database.
///
/// Existing rows are left untouched. Returns how many entries were inserted.
pub async fn seed_builtin_achievements(
    achievement_repo: Arc<dyn AchievementRepository>,
) -> Result<usize, DomainError> {
    let configs = builtin_achievement_configs()?;

    let mut seeded_count = 0;
    for config in configs.iter() {
        let definition = AchievementDefinition::new(
            &config.code,
            &config.title,
            &config.description,
            &config.icon,
        )?;

        if achievement_repo
            .create_definition_if_absent(&definition)
            .await?
        {
            seeded_count += 1;
            info!("Seeded built-in achievement: {} ({})", config.title, config.code);
        }
    }

    if seeded_count > 0 {
        info!("Seeded {} built-in achievements", seeded_count);
    }

    Ok(seeded_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnstreak_domain::achievement::{codes, AchievementRules};
    use learnstreak_domain::streak::StreakState;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_parses_and_is_valid() {
        let configs = builtin_achievement_configs().unwrap();
        for config in &configs {
            AchievementDefinition::new(&config.code, &config.title, &config.description, &config.icon)
                .unwrap();
        }

        let unique: HashSet<&str> = configs.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(unique.len(), configs.len());
    }

    #[test]
    fn test_builtin_catalog_covers_every_rule() {
        let codes_in_catalog: HashSet<String> = builtin_achievement_configs()
            .unwrap()
            .into_iter()
            .map(|c| c.code)
            .collect();

        let mut emitted = AchievementRules::for_enrollment(true);
        for (current, longest) in [(1, 1), (7, 7), (30, 30), (14, 14)] {
            let state = StreakState::restore(current, longest, None, None);
            emitted.extend(AchievementRules::for_chapter_completion(&state));
        }

        for code in emitted {
            assert!(codes_in_catalog.contains(code.as_str()), "missing {}", code);
        }
        assert!(codes_in_catalog.contains(codes::FIRST_COURSE_CREATED));
        assert!(codes_in_catalog.contains(codes::FIRST_COURSE_COMPLETED));
    }
}
