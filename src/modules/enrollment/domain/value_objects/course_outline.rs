use crate::modules::course::domain::Course;

/// Lesson ids of one module, as seen by progress tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOutline {
    pub module_id: String,
    pub lesson_ids: Vec<String>,
}

/// The shape of a course that progress is measured against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseOutline {
    modules: Vec<ModuleOutline>,
}

impl CourseOutline {
    pub fn new(modules: Vec<ModuleOutline>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleOutline] {
        &self.modules
    }

    pub fn contains_lesson(&self, lesson_id: &str) -> bool {
        self.modules
            .iter()
            .any(|m| m.lesson_ids.iter().any(|id| id == lesson_id))
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lesson_ids.len()).sum()
    }
}

impl From<&Course> for CourseOutline {
    fn from(course: &Course) -> Self {
        Self::new(
            course
                .modules()
                .iter()
                .map(|module| ModuleOutline {
                    module_id: module.id().to_string(),
                    lesson_ids: module.lessons().iter().map(|l| l.id().to_string()).collect(),
                })
                .collect(),
        )
    }
}
