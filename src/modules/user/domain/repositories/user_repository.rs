use async_trait::async_trait;

use crate::modules::user::domain::entities::User;
use crate::shared::context::OperationContext;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, ctx: &OperationContext, user: &User) -> AppResult<()>;

    async fn update(&self, ctx: &OperationContext, user: &User) -> AppResult<()>;

    async fn delete(&self, ctx: &OperationContext, id: &str) -> AppResult<()>;

    /// Fails with `NotFound` when no user has this id.
    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<User>;

    async fn get_all(&self, ctx: &OperationContext) -> AppResult<Vec<User>>;
}
