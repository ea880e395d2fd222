/// Query for every course taught by one teacher
#[derive(Debug, Clone)]
pub struct CoursesByTeacherQuery {
    pub teacher_id: String,
}

impl CoursesByTeacherQuery {
    pub fn new(teacher_id: impl Into<String>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
        }
    }
}
