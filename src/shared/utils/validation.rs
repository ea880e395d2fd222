use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use crate::shared::errors::AppError;

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub struct Validator;

impl Validator {
    /// Reject empty or whitespace-only values for a required field.
    pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!("{} is required", field)));
        }
        Ok(())
    }

    /// Use the caller-supplied id or generate a v4 UUID when none was given.
    /// A supplied but blank id is rejected rather than replaced.
    pub fn resolve_id(field: &str, id: Option<String>) -> Result<String, AppError> {
        match id {
            Some(id) => {
                Self::validate_required(field, &id)?;
                Ok(id)
            }
            None => Ok(Uuid::new_v4().to_string()),
        }
    }

    pub fn validate_title(field: &str, title: &str) -> Result<(), AppError> {
        Self::validate_required(field, title)?;
        if title.chars().count() > 255 {
            return Err(AppError::ValidationError(format!(
                "{} too long (max 255 characters)",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_rating(rating: f64) -> Result<(), AppError> {
        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return Err(AppError::ValidationError(
                "rating must be between 0 and 5".to_string(),
            ));
        }
        Self::validate_two_decimals("rating", rating)
    }

    /// NUMERIC columns keep two decimal places; anything finer would be
    /// rounded on write.
    pub fn validate_two_decimals(field: &str, value: f64) -> Result<(), AppError> {
        if (value * 100.0).round() / 100.0 != value {
            return Err(AppError::ValidationError(format!(
                "{} {} has more than 2 decimal places",
                field, value
            )));
        }
        Ok(())
    }

    pub fn validate_percentage(value: f64) -> Result<(), AppError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(AppError::ValidationError(
                "progress must be between 0 and 100".to_string(),
            ));
        }
        Self::validate_two_decimals("progress", value)
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        Self::validate_required("email", email)?;
        let re = EMAIL_RE
            .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
            .as_ref()
            .ok_or_else(|| AppError::InternalError("email pattern failed to compile".into()))?;
        if !re.is_match(email) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid email address",
                email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(Validator::validate_required("course id", "").is_err());
        assert!(Validator::validate_required("course id", "   ").is_err());
        assert!(Validator::validate_required("course id", "c1").is_ok());
    }

    #[test]
    fn required_message_names_field() {
        let err = Validator::validate_required("teacher id", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: teacher id is required");
    }

    #[test]
    fn resolve_id_generates_or_keeps() {
        assert_eq!(
            Validator::resolve_id("course id", Some("c1".to_string())).unwrap(),
            "c1"
        );
        let generated = Validator::resolve_id("course id", None).unwrap();
        assert!(Uuid::parse_str(&generated).is_ok());
        assert!(Validator::resolve_id("course id", Some(String::new())).is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(Validator::validate_rating(0.0).is_ok());
        assert!(Validator::validate_rating(5.0).is_ok());
        assert!(Validator::validate_rating(4.5).is_ok());
        assert!(Validator::validate_rating(-0.1).is_err());
        assert!(Validator::validate_rating(5.01).is_err());
        assert!(Validator::validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn rating_and_progress_keep_two_decimals() {
        assert!(Validator::validate_rating(4.57).is_ok());
        assert!(Validator::validate_rating(3.25).is_ok());
        assert!(Validator::validate_rating(4.567).is_err());
        assert!(Validator::validate_percentage(66.67).is_ok());
        assert!(Validator::validate_percentage(33.333).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(Validator::validate_email("ada@example.com").is_ok());
        assert!(Validator::validate_email("ada.example.com").is_err());
        assert!(Validator::validate_email("ada@example").is_err());
        assert!(Validator::validate_email("").is_err());
    }
}
