//! Base traits for command and query handlers
//!
//! Every handler takes a plain data struct in and returns `AppResult<T>`.
//! The `OperationContext` carries cancellation and deadline down to the
//! repositories.
//!
//! # Example
//!
//! ```rust,ignore
//! struct DeleteCourseCommand {
//!     course_id: String,
//! }
//!
//! struct DeleteCourseHandler {
//!     courses: Arc<dyn CourseRepository>,
//! }
//!
//! #[async_trait]
//! impl UseCase<DeleteCourseCommand, ()> for DeleteCourseHandler {
//!     async fn execute(&self, ctx: &OperationContext, command: DeleteCourseCommand) -> AppResult<()> {
//!         self.courses.delete(ctx, &command.course_id).await
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::shared::context::OperationContext;
use crate::shared::errors::AppResult;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult>: Send + Sync {
    /// Execute the use case with the given command
    async fn execute(&self, ctx: &OperationContext, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult>: Send + Sync {
    /// Execute the query
    async fn execute(&self, ctx: &OperationContext, query: TQuery) -> AppResult<TResult>;
}
