use async_trait::async_trait;

use super::{AchievementCode, AchievementDefinition, AchievementUnlock, UnlockedAchievement};
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Insert a catalog entry unless its code already exists.
    ///
    /// Returns `true` when a row was created. Existing entries are left as they are.
    async fn create_definition_if_absent(
        &self,
        definition: &AchievementDefinition,
    ) -> Result<bool, DomainError>;

    async fn find_definition(
        &self,
        code: &AchievementCode,
    ) -> Result<Option<AchievementDefinition>, DomainError>;

    async fn list_definitions(&self) -> Result<Vec<AchievementDefinition>, DomainError>;

    /// Atomically record an unlock unless `(user, code)` is already held.
    ///
    /// Must be conflict tolerant: a concurrent writer inserting the same pair
    /// yields `Ok(false)`, never an error. Returns `true` when this call
    /// created the row.
    async fn record_unlock_if_absent(&self, unlock: &AchievementUnlock)
        -> Result<bool, DomainError>;

    async fn find_unlock(
        &self,
        user_id: &UserId,
        code: &AchievementCode,
    ) -> Result<Option<AchievementUnlock>, DomainError>;

    /// Unlocked badges for a user, most recent first
    async fn list_unlocked(&self, user_id: &UserId)
        -> Result<Vec<UnlockedAchievement>, DomainError>;
}
