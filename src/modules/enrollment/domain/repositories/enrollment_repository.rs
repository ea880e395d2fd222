use async_trait::async_trait;

use crate::modules::enrollment::domain::entities::Enrollment;
use crate::shared::context::OperationContext;
use crate::shared::errors::AppResult;

/// Persistence port for the enrollment aggregate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Fails with `AlreadyExists` when the user is already enrolled in the course.
    async fn create(&self, ctx: &OperationContext, enrollment: &Enrollment) -> AppResult<()>;

    /// Replaces the enrollment row and every progress record.
    async fn update(&self, ctx: &OperationContext, enrollment: &Enrollment) -> AppResult<()>;

    async fn delete(&self, ctx: &OperationContext, id: &str) -> AppResult<()>;

    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Enrollment>;

    async fn get_all(&self, ctx: &OperationContext) -> AppResult<Vec<Enrollment>>;

    async fn get_by_user_and_course(
        &self,
        ctx: &OperationContext,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Enrollment>>;

    async fn get_all_by_user_id(
        &self,
        ctx: &OperationContext,
        user_id: &str,
    ) -> AppResult<Vec<Enrollment>>;
}
