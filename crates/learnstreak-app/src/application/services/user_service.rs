use std::sync::Arc;
use tracing::info;

use crate::application::dtos::UserDto;
use learnstreak_domain::shared::DomainError;
use learnstreak_domain::user::{User, UserRepository};

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create the user unless one with this email already exists.
    ///
    /// The existing record wins; `name` is ignored for it.
    pub async fn ensure_user(&self, email: &str, name: &str) -> Result<UserDto, DomainError> {
        let candidate = User::new(email, name.to_string())?;
        let created = self.user_repo.create_if_absent(&candidate).await?;

        let user = if created {
            info!(user_id = %candidate.id(), "User created");
            candidate
        } else {
            self.user_repo
                .find_by_id(candidate.id())
                .await?
                .ok_or_else(|| DomainError::UserNotFound(candidate.id().to_string()))?
        };

        Ok(UserDto {
            id: user.id().as_str().to_string(),
            name: user.name().to_string(),
            created_at: user.created_at().to_rfc3339(),
            created,
        })
    }
}
