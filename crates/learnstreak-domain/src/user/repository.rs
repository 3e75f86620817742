use async_trait::async_trait;

use super::User;
use crate::shared::{DomainError, UserId};
use crate::streak::StreakState;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user unless one with the same id exists.
    ///
    /// Returns `true` when a row was created.
    async fn create_if_absent(&self, user: &User) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Replace all streak columns in a single statement.
    ///
    /// Returns `false` when no user with `id` exists.
    async fn update_streak(&self, id: &UserId, streak: &StreakState) -> Result<bool, DomainError>;
}
