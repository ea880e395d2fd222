use crate::modules::user::domain::value_objects::Role;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    username: String,
    email: String,
    role: Role,
    profile: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        profile: impl Into<String>,
    ) -> AppResult<Self> {
        let id = id.into();
        let username = username.into();
        let email = email.into();
        let profile = profile.into();

        Validator::validate_required("user id", &id)?;
        Validator::validate_required("username", &username)?;
        Validator::validate_email(&email)?;
        Self::validate_profile(role, &profile)?;

        Ok(Self {
            id,
            username,
            email,
            role,
            profile,
        })
    }

    fn validate_profile(role: Role, profile: &str) -> AppResult<()> {
        if role == Role::Teacher && profile.trim().is_empty() {
            return Err(AppError::ValidationError(
                "teacher profile is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn can_teach(&self) -> bool {
        matches!(self.role, Role::Teacher | Role::Admin)
    }

    pub fn can_enroll(&self) -> bool {
        self.role == Role::Student
    }

    pub fn update_username(&mut self, username: impl Into<String>) -> AppResult<()> {
        let username = username.into();
        Validator::validate_required("username", &username)?;
        self.username = username;
        Ok(())
    }

    pub fn update_email(&mut self, email: impl Into<String>) -> AppResult<()> {
        let email = email.into();
        Validator::validate_email(&email)?;
        self.email = email;
        Ok(())
    }

    pub fn update_profile(&mut self, profile: impl Into<String>) -> AppResult<()> {
        let profile = profile.into();
        Self::validate_profile(self.role, &profile)?;
        self.profile = profile;
        Ok(())
    }
}
