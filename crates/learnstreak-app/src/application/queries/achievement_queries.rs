use std::sync::Arc;

use crate::application::dtos::{AchievementDto, UnlockedAchievementDto};
use learnstreak_domain::achievement::{AchievementDefinition, AchievementRepository};
use learnstreak_domain::shared::{DomainError, UserId};

pub struct AchievementQueryService {
    achievement_repo: Arc<dyn AchievementRepository>,
}

impl AchievementQueryService {
    pub fn new(achievement_repo: Arc<dyn AchievementRepository>) -> Self {
        Self { achievement_repo }
    }

    /// Badges held by the user, newest first
    pub async fn list_unlocked(
        &self,
        user_id: &str,
    ) -> Result<Vec<UnlockedAchievementDto>, DomainError> {
        let unlocked = self
            .achievement_repo
            .list_unlocked(&UserId::from_email(user_id))
            .await?;

        Ok(unlocked
            .into_iter()
            .map(|u| UnlockedAchievementDto {
                code: u.definition.code().as_str().to_string(),
                title: u.definition.title().to_string(),
                description: u.definition.description().to_string(),
                icon: u.definition.icon().to_string(),
                unlocked_at: u.unlocked_at.to_rfc3339(),
            })
            .collect())
    }

    pub async fn list_catalog(&self) -> Result<Vec<AchievementDto>, DomainError> {
        let definitions = self.achievement_repo.list_definitions().await?;
        Ok(definitions.iter().map(to_dto).collect())
    }
}

fn to_dto(definition: &AchievementDefinition) -> AchievementDto {
    AchievementDto {
        code: definition.code().as_str().to_string(),
        title: definition.title().to_string(),
        description: definition.description().to_string(),
        icon: definition.icon().to_string(),
    }
}
