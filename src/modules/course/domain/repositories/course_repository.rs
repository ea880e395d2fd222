/// Repository port for the course aggregate
///
/// Every write covers the whole tree (course, tags, modules, lessons,
/// exercises) inside a single transaction. Reads rebuild the tree through
/// the validating constructors.
use async_trait::async_trait;

use crate::modules::course::domain::entities::Course;
use crate::shared::context::OperationContext;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert the course and its whole subtree. All or nothing.
    async fn create(&self, ctx: &OperationContext, course: &Course) -> AppResult<()>;

    /// Replace the stored course, its tags and its subtree.
    /// Fails with `NotFound` when no course has this id.
    async fn update(&self, ctx: &OperationContext, course: &Course) -> AppResult<()>;

    /// Delete the course; descendants go with it.
    async fn delete(&self, ctx: &OperationContext, id: &str) -> AppResult<()>;

    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Course>;

    async fn get_all(&self, ctx: &OperationContext) -> AppResult<Vec<Course>>;

    async fn get_all_by_teacher_id(
        &self,
        ctx: &OperationContext,
        teacher_id: &str,
    ) -> AppResult<Vec<Course>>;

    async fn exists(&self, ctx: &OperationContext, id: &str) -> AppResult<bool>;
}
