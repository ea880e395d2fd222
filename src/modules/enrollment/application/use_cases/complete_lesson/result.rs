/// Course progress after completing a lesson
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteLessonResult {
    pub enrollment_id: String,
    pub course_progress: f64,
    pub course_completed: bool,
}
