/// Command for registering a new user
///
/// `user_id` is optional: when absent a UUID is generated.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub user_id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: String,
    pub profile: String,
}

impl RegisterUserCommand {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            user_id: None,
            username: username.into(),
            email: email.into(),
            role: role.into(),
            profile: profile.into(),
        }
    }

    pub fn with_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}
