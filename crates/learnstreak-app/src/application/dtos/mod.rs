mod achievement_dto;
mod enrollment_dto;
mod streak_dto;
mod user_dto;

pub use achievement_dto::*;
pub use enrollment_dto::*;
pub use streak_dto::*;
pub use user_dto::*;

use learnstreak_domain::enrollment::Enrollment;

impl From<&Enrollment> for EnrollmentDto {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            id: enrollment.id().as_str().to_string(),
            user_id: enrollment.user_id().as_str().to_string(),
            course_id: enrollment.course_id().as_str().to_string(),
            completed_chapters: enrollment.completed_chapters().to_vec(),
            enrolled_at: enrollment.enrolled_at().to_rfc3339(),
        }
    }
}
