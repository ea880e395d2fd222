/// Command putting a module's lessons in the given order (1-based)
#[derive(Debug, Clone)]
pub struct ReorderLessonsCommand {
    pub module_id: String,
    pub ordered_lesson_ids: Vec<String>,
}

impl ReorderLessonsCommand {
    pub fn new(module_id: impl Into<String>, ordered_lesson_ids: Vec<String>) -> Self {
        Self {
            module_id: module_id.into(),
            ordered_lesson_ids,
        }
    }
}
