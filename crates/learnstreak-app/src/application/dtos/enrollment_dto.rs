use serde::{Deserialize, Serialize};

use super::{StreakUpdateDto, UnlockResultDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentDto {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub completed_chapters: Vec<u32>,
    pub enrolled_at: String, // RFC 3339
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnrollOutcomeDto {
    Enrolled {
        enrollment: EnrollmentDto,
        is_first_course: bool,
        unlocks: Vec<UnlockResultDto>,
    },
    AlreadyEnrolled {
        enrollment: Option<EnrollmentDto>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterCompletionDto {
    pub enrollment: EnrollmentDto,
    /// `None` when the user record is missing and no streak was evaluated
    pub streak: Option<StreakUpdateDto>,
    pub unlocks: Vec<UnlockResultDto>,
}
