pub mod app;
pub mod modules;
pub mod schema;
pub mod shared;

pub use app::{Application, ApplicationContainer, Repositories};
pub use shared::config::AppConfig;
pub use shared::context::OperationContext;
pub use shared::errors::{AppError, AppResult};
