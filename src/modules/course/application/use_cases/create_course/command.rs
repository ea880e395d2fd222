use crate::modules::course::application::inputs::ModuleInput;

/// Command for creating a course together with its whole module tree
#[derive(Debug, Clone, Default)]
pub struct CreateCourseCommand {
    pub course_id: Option<String>,
    pub teacher_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// Seconds
    pub duration: u32,
    pub domain: String,
    pub tags: Vec<String>,
    /// Defaults to 0 for a new course
    pub rating: Option<f64>,
    pub level: String,
    pub modules: Vec<ModuleInput>,
}
