use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Stored data the domain no longer understands (unknown enum string,
    /// malformed numeric). Never coerced to a default.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Prefix the message with `context` while keeping the variant, so callers
    /// can still tell a not-found from a storage failure.
    pub fn context(self, context: impl AsRef<str>) -> Self {
        let context = context.as_ref();
        match self {
            AppError::ValidationError(m) => AppError::ValidationError(format!("{}: {}", context, m)),
            AppError::NotFound(m) => AppError::NotFound(format!("{}: {}", context, m)),
            AppError::AlreadyExists(m) => AppError::AlreadyExists(format!("{}: {}", context, m)),
            AppError::Unauthorized(m) => AppError::Unauthorized(format!("{}: {}", context, m)),
            AppError::DatabaseError(m) => AppError::DatabaseError(format!("{}: {}", context, m)),
            AppError::DataIntegrityError(m) => {
                AppError::DataIntegrityError(format!("{}: {}", context, m))
            }
            AppError::Cancelled(m) => AppError::Cancelled(format!("{}: {}", context, m)),
            AppError::InternalError(m) => AppError::InternalError(format!("{}: {}", context, m)),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::ValidationError(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled(_))
    }

    /// Turn a domain validation failure into a data-integrity failure.
    /// Used when reconstructing aggregates from rows that should have been valid.
    pub fn into_integrity(self) -> Self {
        match self {
            AppError::ValidationError(m) => AppError::DataIntegrityError(m),
            other => other,
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<super::ParseEnumError> for AppError {
    fn from(err: super::ParseEnumError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::ValidationError(format!("Invalid UUID: {}", err))
    }
}

/// Attach context to any fallible result without losing the error kind.
pub trait ResultExt<T> {
    fn context(self, context: impl AsRef<str>) -> AppResult<T>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn context(self, context: impl AsRef<str>) -> AppResult<T> {
        self.map_err(|e| e.into().context(context))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
