mod repository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};
use crate::streak::StreakState;

pub use repository::UserRepository;

/// A learner, identified by email address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    streak: StreakState,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with an empty streak
    pub fn new(email: &str, name: String) -> Result<Self, DomainError> {
        let id = UserId::from_email(email);
        if id.as_str().is_empty() || !id.as_str().contains('@') {
            return Err(DomainError::Validation(format!(
                "User email is not a valid address: '{}'",
                id
            )));
        }

        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "User name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            name,
            streak: StreakState::empty(),
            created_at: Utc::now(),
        })
    }

    /// Restore user from persistence
    pub fn restore(
        id: UserId,
        name: String,
        streak: StreakState,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            streak,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn streak(&self) -> &StreakState {
        &self.streak
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user() {
        let user = User::new(" learner@example.com ", "Learner".to_string()).unwrap();
        assert_eq!(user.id().as_str(), "learner@example.com");
        assert_eq!(user.name(), "Learner");
        assert_eq!(user.streak(), &StreakState::empty());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let result = User::new("not-an-email", "Learner".to_string());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = User::new("learner@example.com", "  ".to_string());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
