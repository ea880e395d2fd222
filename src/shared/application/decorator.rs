use async_trait::async_trait;

use crate::shared::application::use_case::{Query, UseCase};
use crate::shared::context::OperationContext;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Decorator that adds timing and outcome logging to any handler
///
/// Wraps a `UseCase` or `Query` implementation without changing its
/// contract: the inner result is returned untouched.
pub struct Logged<H> {
    name: &'static str,
    inner: H,
}

impl<H> Logged<H> {
    pub fn new(name: &'static str, inner: H) -> Self {
        Self { name, inner }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

#[async_trait]
impl<H, C, R> UseCase<C, R> for Logged<H>
where
    H: UseCase<C, R>,
    C: Send + 'static,
    R: Send + 'static,
{
    async fn execute(&self, ctx: &OperationContext, command: C) -> AppResult<R> {
        let timer = TimedOperation::new(self.name);
        let result = UseCase::execute(&self.inner, ctx, command).await;
        LogContext::use_case("Command", self.name, result.is_ok(), timer.elapsed_ms());
        if let Err(e) = &result {
            LogContext::error_with_context(e, self.name);
        }
        result
    }
}

#[async_trait]
impl<H, Q, R> Query<Q, R> for Logged<H>
where
    H: Query<Q, R>,
    Q: Send + 'static,
    R: Send + 'static,
{
    async fn execute(&self, ctx: &OperationContext, query: Q) -> AppResult<R> {
        let timer = TimedOperation::new(self.name);
        let result = Query::execute(&self.inner, ctx, query).await;
        LogContext::use_case("Query", self.name, result.is_ok(), timer.elapsed_ms());
        result
    }
}
