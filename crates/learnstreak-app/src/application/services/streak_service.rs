use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::dtos::StreakUpdateDto;
use learnstreak_domain::shared::{DomainError, UserId};
use learnstreak_domain::streak::{StreakEvaluation, StreakEvaluator};
use learnstreak_domain::user::UserRepository;

/// Credits learning activity to a user's daily streak
pub struct StreakService {
    user_repo: Arc<dyn UserRepository>,
}

impl StreakService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Credit a completion happening now.
    ///
    /// `Ok(None)` means no user record exists and nothing was evaluated.
    pub async fn evaluate_streak(
        &self,
        user_id: &str,
    ) -> Result<Option<StreakUpdateDto>, DomainError> {
        let id = UserId::from_email(user_id);
        let evaluation = self.credit_completion(&id, Utc::now()).await?;

        Ok(evaluation.map(|evaluation| to_dto(&id, &evaluation)))
    }

    /// Evaluate the stored streak at `now` and persist the result in one update
    pub async fn credit_completion(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Option<StreakEvaluation>, DomainError> {
        let Some(user) = self.user_repo.find_by_id(user_id).await? else {
            warn!(user_id = %user_id, "Streak evaluation skipped: user not found");
            return Ok(None);
        };

        let evaluation = StreakEvaluator::evaluate(user.streak(), now);

        if !self
            .user_repo
            .update_streak(user_id, &evaluation.state)
            .await?
        {
            // Deleted between read and write
            warn!(user_id = %user_id, "Streak update matched no user row");
            return Ok(None);
        }

        info!(
            user_id = %user_id,
            current = evaluation.state.current_streak(),
            longest = evaluation.state.longest_streak(),
            is_new_record = evaluation.is_new_record,
            credited_today = evaluation.credited_today,
            "Streak evaluated"
        );

        Ok(Some(evaluation))
    }

    /// Whether the user was already credited today; `false` for unknown users
    pub async fn check_today_completion(&self, user_id: &str) -> Result<bool, DomainError> {
        let id = UserId::from_email(user_id);
        let completed = self
            .user_repo
            .find_by_id(&id)
            .await?
            .is_some_and(|user| StreakEvaluator::is_completed_today(user.streak(), Utc::now()));

        Ok(completed)
    }
}

pub(crate) fn to_dto(user_id: &UserId, evaluation: &StreakEvaluation) -> StreakUpdateDto {
    StreakUpdateDto {
        user_id: user_id.as_str().to_string(),
        current_streak: evaluation.state.current_streak(),
        longest_streak: evaluation.state.longest_streak(),
        last_completion_date: evaluation
            .state
            .last_completion_date()
            .map(|d| d.to_rfc3339()),
        is_new_record: evaluation.is_new_record,
        credited_today: evaluation.credited_today,
    }
}
