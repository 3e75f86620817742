use chrono::{Local, Utc};
use std::sync::Arc;

use crate::application::dtos::StreakSummaryDto;
use learnstreak_domain::shared::{DomainError, UserId};
use learnstreak_domain::user::UserRepository;

/// Read side of the streak counters
pub struct StreakQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl StreakQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Summary for the dashboard. An unknown user reports zeros.
    pub async fn get_streak_summary(&self, user_id: &str) -> Result<StreakSummaryDto, DomainError> {
        let id = UserId::from_email(user_id);
        let Some(user) = self.user_repo.find_by_id(&id).await? else {
            return Ok(StreakSummaryDto {
                user_id: id.as_str().to_string(),
                current_streak: 0,
                longest_streak: 0,
                last_completion_date: None,
                streak_start_date: None,
                completed_today: false,
            });
        };

        let streak = user.streak();
        Ok(StreakSummaryDto {
            user_id: id.as_str().to_string(),
            current_streak: streak.current_streak(),
            longest_streak: streak.longest_streak(),
            last_completion_date: streak.last_completion_date().map(|d| d.to_rfc3339()),
            streak_start_date: streak.streak_start_date().map(|d| d.to_rfc3339()),
            completed_today: streak.is_credited_on(Utc::now(), &Local),
        })
    }
}
