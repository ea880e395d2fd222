/// Command marking a lesson completed for an enrolled user
#[derive(Debug, Clone)]
pub struct CompleteLessonCommand {
    pub user_id: String,
    pub course_id: String,
    pub lesson_id: String,
}

impl CompleteLessonCommand {
    pub fn new(
        user_id: impl Into<String>,
        course_id: impl Into<String>,
        lesson_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            course_id: course_id.into(),
            lesson_id: lesson_id.into(),
        }
    }
}
