use async_trait::async_trait;

use super::Enrollment;
use crate::shared::{CourseId, DomainError, UserId};

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Insert the enrollment unless the user is already enrolled in the course.
    ///
    /// Returns `true` when a row was created.
    async fn create_if_absent(&self, enrollment: &Enrollment) -> Result<bool, DomainError>;

    async fn find(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// Whether the user has at least one enrollment in any course
    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError>;

    async fn update_completed_chapters(&self, enrollment: &Enrollment) -> Result<(), DomainError>;
}
