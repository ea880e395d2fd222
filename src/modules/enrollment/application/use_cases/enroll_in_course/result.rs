/// Result of enrolling in a course
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollInCourseResult {
    pub enrollment_id: String,
}

impl EnrollInCourseResult {
    pub fn new(enrollment_id: String) -> Self {
        Self { enrollment_id }
    }
}
