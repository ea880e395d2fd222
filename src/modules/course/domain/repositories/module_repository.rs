use std::collections::HashMap;

use async_trait::async_trait;

use crate::modules::course::domain::entities::Module;
use crate::shared::context::OperationContext;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Module>;

    /// Modules of a course with their lessons, in order.
    async fn get_by_course_id(
        &self,
        ctx: &OperationContext,
        course_id: &str,
    ) -> AppResult<Vec<Module>>;

    async fn exists(&self, ctx: &OperationContext, id: &str) -> AppResult<bool>;

    /// Assign new order indices (module id → index). The map must cover
    /// every module of the course with distinct indices.
    async fn reorder_modules(
        &self,
        ctx: &OperationContext,
        course_id: &str,
        orders: &HashMap<String, i32>,
    ) -> AppResult<()>;
}
