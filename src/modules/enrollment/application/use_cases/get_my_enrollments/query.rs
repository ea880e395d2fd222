/// Query for every enrollment of one user
#[derive(Debug, Clone)]
pub struct GetMyEnrollmentsQuery {
    pub user_id: String,
}

impl GetMyEnrollmentsQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
