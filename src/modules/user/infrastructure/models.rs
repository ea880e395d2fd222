use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::user::domain::{entities::User, value_objects::Role};
use crate::schema::users;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserModel {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub profile: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub profile: Option<&'a str>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct UserChangeset<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub profile: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id(),
            username: user.username(),
            email: user.email(),
            role: user.role().as_str(),
            profile: (!user.profile().is_empty()).then_some(user.profile()),
        }
    }
}

impl<'a> From<&'a User> for UserChangeset<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            username: user.username(),
            email: user.email(),
            role: user.role().as_str(),
            profile: (!user.profile().is_empty()).then_some(user.profile()),
            updated_at: Utc::now(),
        }
    }
}

impl UserModel {
    /// Rebuild the domain user; an unknown stored role is a data-integrity error.
    pub fn to_user(self) -> AppResult<User> {
        let role = self.role.parse::<Role>().map_err(|e| {
            AppError::DataIntegrityError(format!("user '{}': {}", self.id, e))
        })?;
        let id = self.id.clone();
        User::new(
            self.id,
            self.username,
            self.email,
            role,
            self.profile.unwrap_or_default(),
        )
        .map_err(|e| e.into_integrity().context(format!("rebuild user '{}'", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(role: &str, profile: Option<&str>) -> UserModel {
        UserModel {
            id: "u1".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            role: role.to_string(),
            profile: profile.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn rebuilds_user_from_row() {
        let user = model("teacher", Some("Compilers")).to_user().unwrap();
        assert_eq!(user.role(), Role::Teacher);
        assert_eq!(user.profile(), "Compilers");
    }

    #[test]
    fn unknown_role_is_integrity_error() {
        let err = model("janitor", None).to_user().unwrap_err();
        assert_eq!(
            err,
            AppError::DataIntegrityError("user 'u1': unknown 'janitor' role".to_string())
        );
    }

    #[test]
    fn invalid_row_is_integrity_error() {
        let err = model("teacher", None).to_user().unwrap_err();
        assert!(matches!(err, AppError::DataIntegrityError(_)));
    }

    #[test]
    fn empty_profile_is_stored_as_null() {
        let user = User::new("s1", "bob", "bob@example.com", Role::Student, "").unwrap();
        assert_eq!(NewUser::from(&user).profile, None);
    }
}
