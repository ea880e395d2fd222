/// Result of creating a course
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCourseResult {
    pub course_id: String,
    pub module_count: usize,
    pub lesson_count: usize,
}

impl CreateCourseResult {
    pub fn new(course_id: String, module_count: usize, lesson_count: usize) -> Self {
        Self {
            course_id,
            module_count,
            lesson_count,
        }
    }
}
