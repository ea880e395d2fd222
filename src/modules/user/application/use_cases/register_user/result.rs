use crate::modules::user::domain::Role;

/// Result of registering a user
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserResult {
    pub user_id: String,
    pub role: Role,
}

impl RegisterUserResult {
    pub fn new(user_id: String, role: Role) -> Self {
        Self { user_id, role }
    }
}
