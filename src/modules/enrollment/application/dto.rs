use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::enrollment::domain::{Enrollment, LessonProgress, ModuleProgress, Status};

/// Read model of an enrollment for the transport layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub enrolled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: f64,
    pub status: Status,
    pub modules: Vec<ModuleProgress>,
    pub lessons: Vec<LessonProgress>,
}

impl From<&Enrollment> for EnrollmentDto {
    fn from(enrollment: &Enrollment) -> Self {
        let progress = enrollment.course_progress().progress();
        Self {
            id: enrollment.id().to_string(),
            user_id: enrollment.user_id().to_string(),
            course_id: enrollment.course_id().to_string(),
            enrolled_at: enrollment.enrolled_at(),
            started_at: enrollment.started_at(),
            completed_at: enrollment.completed_at(),
            progress: progress.percentage(),
            status: progress.status(),
            modules: enrollment.module_progress().to_vec(),
            lessons: enrollment.lesson_progress().to_vec(),
        }
    }
}
