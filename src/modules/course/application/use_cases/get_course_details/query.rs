/// Query for one course with its full tree
#[derive(Debug, Clone)]
pub struct GetCourseDetailsQuery {
    pub course_id: String,
}

impl GetCourseDetailsQuery {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}
