mod app_error;
mod parse_error;

pub use app_error::{AppError, AppResult, ResultExt};
pub use parse_error::ParseEnumError;
