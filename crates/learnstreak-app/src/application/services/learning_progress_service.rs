use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::application::dtos::{ChapterCompletionDto, EnrollmentDto};
use crate::application::services::streak_service::to_dto;
use crate::application::services::{AchievementService, StreakService};
use learnstreak_domain::achievement::AchievementRules;
use learnstreak_domain::enrollment::EnrollmentRepository;
use learnstreak_domain::shared::{CourseId, DomainError, UserId};

/// Chapter completion flow: progress, then streak, then rules
pub struct LearningProgressService {
    enrollment_repo: Arc<dyn EnrollmentRepository>,
    streak_service: Arc<StreakService>,
    achievement_service: Arc<AchievementService>,
}

impl LearningProgressService {
    pub fn new(
        enrollment_repo: Arc<dyn EnrollmentRepository>,
        streak_service: Arc<StreakService>,
        achievement_service: Arc<AchievementService>,
    ) -> Self {
        Self {
            enrollment_repo,
            streak_service,
            achievement_service,
        }
    }

    pub async fn complete_chapter(
        &self,
        user_id: &str,
        course_id: &str,
        completed_chapters: Vec<u32>,
    ) -> Result<ChapterCompletionDto, DomainError> {
        self.complete_chapter_at(user_id, course_id, completed_chapters, Utc::now())
            .await
    }

    /// Record the completed chapter list, credit the streak at `now` and
    /// unlock whatever the updated counters qualify for.
    pub async fn complete_chapter_at(
        &self,
        user_id: &str,
        course_id: &str,
        completed_chapters: Vec<u32>,
        now: DateTime<Utc>,
    ) -> Result<ChapterCompletionDto, DomainError> {
        let user_id = UserId::from_email(user_id);
        let course_id = CourseId::from_string(course_id);

        let mut enrollment = self
            .enrollment_repo
            .find(&user_id, &course_id)
            .await?
            .ok_or_else(|| {
                DomainError::EnrollmentNotFound(format!("{} in course {}", user_id, course_id))
            })?;

        enrollment.set_completed_chapters(completed_chapters);
        self.enrollment_repo
            .update_completed_chapters(&enrollment)
            .await?;

        info!(
            user_id = %user_id,
            course_id = %course_id,
            completed = enrollment.completed_chapters().len(),
            "Chapter progress recorded"
        );

        // The streak write commits before any rule reads its counters
        let Some(evaluation) = self.streak_service.credit_completion(&user_id, now).await? else {
            return Ok(ChapterCompletionDto {
                enrollment: EnrollmentDto::from(&enrollment),
                streak: None,
                unlocks: Vec::new(),
            });
        };

        let codes = AchievementRules::for_chapter_completion(&evaluation.state);
        let unlocks = self.achievement_service.unlock_all(&user_id, &codes).await?;

        Ok(ChapterCompletionDto {
            enrollment: EnrollmentDto::from(&enrollment),
            streak: Some(to_dto(&user_id, &evaluation)),
            unlocks,
        })
    }
}
