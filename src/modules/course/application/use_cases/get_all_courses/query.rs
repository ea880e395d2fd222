/// Query listing courses, optionally narrowed by domain, level and tag
#[derive(Debug, Clone, Default)]
pub struct GetAllCoursesQuery {
    pub domain: Option<String>,
    pub level: Option<String>,
    pub tag: Option<String>,
}

impl GetAllCoursesQuery {
    pub fn all() -> Self {
        Self::default()
    }
}
