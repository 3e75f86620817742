use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use learnstreak_domain::enrollment::{Enrollment, EnrollmentRepository};
use learnstreak_domain::shared::{CourseId, DomainError, EnrollmentId, UserId};

use crate::persistence::{ResultExt, SqliteRepositoryBase};

#[derive(FromRow)]
struct EnrollmentRow {
    id: String,
    user_id: String,
    course_id: String,
    completed_chapters: String,
    enrolled_at: DateTime<Utc>,
}

impl EnrollmentRow {
    fn into_enrollment(self) -> Result<Enrollment, DomainError> {
        let completed_chapters: Vec<u32> = serde_json::from_str(&self.completed_chapters)
            .map_err(|e| {
                DomainError::DataIntegrity(format!(
                    "Invalid completed_chapters for enrollment {}: {}",
                    self.id, e
                ))
            })?;

        Ok(Enrollment::restore(
            EnrollmentId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            CourseId::from_string(&self.course_id),
            completed_chapters,
            self.enrolled_at,
        ))
    }
}

fn chapters_json(enrollment: &Enrollment) -> Result<String, DomainError> {
    serde_json::to_string(enrollment.completed_chapters())
        .map_err(|e| DomainError::Serialization(format!("Failed to serialize chapters: {}", e)))
}

pub struct SqliteEnrollmentRepository {
    base: SqliteRepositoryBase,
}

impl SqliteEnrollmentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl EnrollmentRepository for SqliteEnrollmentRepository {
    async fn create_if_absent(&self, enrollment: &Enrollment) -> Result<bool, DomainError> {
        let query = r#"
            INSERT INTO enrollments (id, user_id, course_id, completed_chapters, enrolled_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id, course_id) DO NOTHING
        "#;

        let chapters = chapters_json(enrollment)?;
        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(enrollment.id().as_str())
                    .bind(enrollment.user_id().as_str())
                    .bind(enrollment.course_id().as_str())
                    .bind(chapters)
                    .bind(enrollment.enrolled_at()),
                "Create enrollment",
            )
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find(
        &self,
        user_id: &UserId,
        course_id: &CourseId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let query = "SELECT id, user_id, course_id, completed_chapters, enrolled_at FROM enrollments WHERE user_id = ?1 AND course_id = ?2";

        let row: Option<EnrollmentRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(course_id.as_str()),
                "Find enrollment",
            )
            .await?;

        row.map(EnrollmentRow::into_enrollment).transpose()
    }

    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = ?1)";

        sqlx::query_scalar::<_, bool>(query)
            .bind(user_id.as_str())
            .fetch_one(self.base.pool())
            .await
            .map_repo_error("Check enrollment exists")
    }

    async fn update_completed_chapters(&self, enrollment: &Enrollment) -> Result<(), DomainError> {
        let query = "UPDATE enrollments SET completed_chapters = ?3 WHERE user_id = ?1 AND course_id = ?2";

        let chapters = chapters_json(enrollment)?;
        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(enrollment.user_id().as_str())
                    .bind(enrollment.course_id().as_str())
                    .bind(chapters),
                "Update completed chapters",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EnrollmentNotFound(format!(
                "{} in course {}",
                enrollment.user_id(),
                enrollment.course_id()
            )));
        }

        Ok(())
    }
}
