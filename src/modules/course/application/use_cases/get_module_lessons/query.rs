/// Query for the lessons of one module, in order
#[derive(Debug, Clone)]
pub struct GetModuleLessonsQuery {
    pub module_id: String,
}

impl GetModuleLessonsQuery {
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
        }
    }
}
