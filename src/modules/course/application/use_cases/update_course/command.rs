use crate::modules::course::application::inputs::ModuleInput;

/// Command replacing a course and its whole module tree
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseCommand {
    pub course_id: String,
    pub teacher_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub duration: u32,
    pub domain: String,
    pub tags: Vec<String>,
    pub rating: f64,
    pub level: String,
    pub modules: Vec<ModuleInput>,
}
