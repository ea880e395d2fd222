/// Command for deleting a course and everything below it
#[derive(Debug, Clone)]
pub struct DeleteCourseCommand {
    pub course_id: String,
}

impl DeleteCourseCommand {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}
