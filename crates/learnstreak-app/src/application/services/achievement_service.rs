use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::dtos::UnlockResultDto;
use learnstreak_domain::achievement::{
    AchievementCode, AchievementRepository, AchievementUnlock, UnlockStatus,
};
use learnstreak_domain::shared::{DomainError, UserId};
use learnstreak_domain::user::UserRepository;

/// Records badge unlocks, at most once per user and code
pub struct AchievementService {
    achievement_repo: Arc<dyn AchievementRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AchievementService {
    pub fn new(
        achievement_repo: Arc<dyn AchievementRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            achievement_repo,
            user_repo,
        }
    }

    pub async fn unlock_achievement(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<UnlockResultDto, DomainError> {
        let user_id = UserId::from_email(user_id);
        let code = AchievementCode::from_string(code);
        let status = self.unlock(&user_id, &code).await?;

        Ok(UnlockResultDto {
            user_id: user_id.as_str().to_string(),
            code: code.as_str().to_string(),
            status,
        })
    }

    pub async fn unlock(
        &self,
        user_id: &UserId,
        code: &AchievementCode,
    ) -> Result<UnlockStatus, DomainError> {
        if self.achievement_repo.find_definition(code).await?.is_none() {
            warn!(user_id = %user_id, code = %code, "Unlock requested for unknown achievement code");
            return Ok(UnlockStatus::UnknownCode);
        }

        if self.user_repo.find_by_id(user_id).await?.is_none() {
            warn!(user_id = %user_id, code = %code, "Unlock requested for unknown user");
            return Ok(UnlockStatus::UnknownUser);
        }

        let unlock = AchievementUnlock::new(user_id.clone(), code.clone());
        let status = if self.achievement_repo.record_unlock_if_absent(&unlock).await? {
            info!(user_id = %user_id, code = %code, "Achievement unlocked");
            UnlockStatus::NewlyUnlocked
        } else {
            debug!(user_id = %user_id, code = %code, "Achievement already unlocked");
            UnlockStatus::AlreadyUnlocked
        };

        Ok(status)
    }

    /// Unlock each code in order, stopping at the first storage failure
    pub async fn unlock_all(
        &self,
        user_id: &UserId,
        codes: &[AchievementCode],
    ) -> Result<Vec<UnlockResultDto>, DomainError> {
        let mut results = Vec::with_capacity(codes.len());

        for code in codes {
            let status = self.unlock(user_id, code).await?;
            results.push(UnlockResultDto {
                user_id: user_id.as_str().to_string(),
                code: code.as_str().to_string(),
                status,
            });
        }

        Ok(results)
    }
}
