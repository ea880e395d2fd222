use std::collections::HashMap;

use async_trait::async_trait;

use crate::modules::course::domain::entities::Lesson;
use crate::shared::context::OperationContext;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Lesson>;

    /// Lessons of a module sorted by order index.
    async fn get_by_module_id(
        &self,
        ctx: &OperationContext,
        module_id: &str,
    ) -> AppResult<Vec<Lesson>>;

    async fn exists(&self, ctx: &OperationContext, id: &str) -> AppResult<bool>;

    async fn update_order(&self, ctx: &OperationContext, id: &str, order: i32) -> AppResult<()>;

    /// Assign new order indices (lesson id → index) in one transaction.
    /// The map must cover every lesson of the module with distinct indices;
    /// otherwise nothing is written.
    async fn reorder_lessons(
        &self,
        ctx: &OperationContext,
        module_id: &str,
        orders: &HashMap<String, i32>,
    ) -> AppResult<()>;
}
