mod repository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CourseId, DomainError, EnrollmentId, UserId};

pub use repository::EnrollmentRepository;

/// A user's enrollment in a generated course, with chapter progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    id: EnrollmentId,
    user_id: UserId,
    course_id: CourseId,
    completed_chapters: Vec<u32>,
    enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(user_id: UserId, course_id: CourseId) -> Result<Self, DomainError> {
        if course_id.as_str().trim().is_empty() {
            return Err(DomainError::Validation(
                "Course ID is required".to_string(),
            ));
        }

        Ok(Self {
            id: EnrollmentId::new(),
            user_id,
            course_id,
            completed_chapters: Vec::new(),
            enrolled_at: Utc::now(),
        })
    }

    /// Restore enrollment from persistence
    pub fn restore(
        id: EnrollmentId,
        user_id: UserId,
        course_id: CourseId,
        completed_chapters: Vec<u32>,
        enrolled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            course_id,
            completed_chapters,
            enrolled_at,
        }
    }

    /// Replace the completed chapter list, dropping duplicates and keeping it sorted
    pub fn set_completed_chapters(&mut self, chapters: Vec<u32>) {
        let mut chapters = chapters;
        chapters.sort_unstable();
        chapters.dedup();
        self.completed_chapters = chapters;
    }

    // Getters
    pub fn id(&self) -> &EnrollmentId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn completed_chapters(&self) -> &[u32] {
        &self.completed_chapters
    }

    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }
}
