/// Command enrolling a student in a course
#[derive(Debug, Clone)]
pub struct EnrollInCourseCommand {
    pub enrollment_id: Option<String>,
    pub user_id: String,
    pub course_id: String,
}

impl EnrollInCourseCommand {
    pub fn new(user_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            enrollment_id: None,
            user_id: user_id.into(),
            course_id: course_id.into(),
        }
    }

    pub fn with_id(mut self, enrollment_id: impl Into<String>) -> Self {
        self.enrollment_id = Some(enrollment_id.into());
        self
    }
}
