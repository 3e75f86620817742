use std::sync::Arc;
use tracing::info;

use crate::application::dtos::{EnrollOutcomeDto, EnrollmentDto};
use crate::application::services::AchievementService;
use learnstreak_domain::achievement::AchievementRules;
use learnstreak_domain::enrollment::{Enrollment, EnrollmentRepository};
use learnstreak_domain::shared::{CourseId, DomainError, UserId};
use learnstreak_domain::user::UserRepository;

pub struct EnrollmentService {
    enrollment_repo: Arc<dyn EnrollmentRepository>,
    user_repo: Arc<dyn UserRepository>,
    achievement_service: Arc<AchievementService>,
}

impl EnrollmentService {
    pub fn new(
        enrollment_repo: Arc<dyn EnrollmentRepository>,
        user_repo: Arc<dyn UserRepository>,
        achievement_service: Arc<AchievementService>,
    ) -> Self {
        Self {
            enrollment_repo,
            user_repo,
            achievement_service,
        }
    }

    /// Enroll a user in a course and fire the enrollment rules.
    ///
    /// A second enrollment in the same course is reported as
    /// [`EnrollOutcomeDto::AlreadyEnrolled`], not as an error.
    pub async fn enroll(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<EnrollOutcomeDto, DomainError> {
        let user_id = UserId::from_email(user_id);
        let course_id = CourseId::from_string(course_id);

        if let Some(existing) = self.enrollment_repo.find(&user_id, &course_id).await? {
            return Ok(EnrollOutcomeDto::AlreadyEnrolled {
                enrollment: Some(EnrollmentDto::from(&existing)),
            });
        }

        if self.user_repo.find_by_id(&user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id.to_string()));
        }

        let enrollment = Enrollment::new(user_id.clone(), course_id.clone())?;

        // Evaluated before the insert so the new row never counts as "prior"
        let is_first_course = !self.enrollment_repo.exists_for_user(&user_id).await?;

        if !self.enrollment_repo.create_if_absent(&enrollment).await? {
            // Lost a race against a concurrent enrollment in the same course
            let existing = self.enrollment_repo.find(&user_id, &course_id).await?;
            return Ok(EnrollOutcomeDto::AlreadyEnrolled {
                enrollment: existing.as_ref().map(EnrollmentDto::from),
            });
        }

        info!(
            user_id = %user_id,
            course_id = %course_id,
            is_first_course,
            "User enrolled"
        );

        let codes = AchievementRules::for_enrollment(is_first_course);
        let unlocks = self.achievement_service.unlock_all(&user_id, &codes).await?;

        Ok(EnrollOutcomeDto::Enrolled {
            enrollment: EnrollmentDto::from(&enrollment),
            is_first_course,
            unlocks,
        })
    }

    pub async fn check_enrollment(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> Result<Option<EnrollmentDto>, DomainError> {
        let enrollment = self
            .enrollment_repo
            .find(&UserId::from_email(user_id), &CourseId::from_string(course_id))
            .await?;

        Ok(enrollment.as_ref().map(EnrollmentDto::from))
    }
}
