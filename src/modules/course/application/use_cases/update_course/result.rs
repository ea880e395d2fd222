/// Result of replacing a course tree
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCourseResult {
    pub course_id: String,
    pub lesson_count: usize,
}

impl UpdateCourseResult {
    pub fn new(course_id: String, lesson_count: usize) -> Self {
        Self {
            course_id,
            lesson_count,
        }
    }
}
