use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::user::domain::{Role, User, UserRepository};
use crate::shared::application::UseCase;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::{command::RegisterUserCommand, result::RegisterUserResult};

/// Use case handler for registering a user
pub struct RegisterUserHandler {
    user_repository: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UseCase<RegisterUserCommand, RegisterUserResult> for RegisterUserHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        command: RegisterUserCommand,
    ) -> AppResult<RegisterUserResult> {
        let user_id = Validator::resolve_id("user id", command.user_id)?;
        Validator::validate_required("username", &command.username)?;
        Validator::validate_required("email", &command.email)?;

        let role = command.role.parse::<Role>().context("invalid role")?;
        let user = User::new(
            user_id,
            command.username,
            command.email,
            role,
            command.profile,
        )
        .context("failed to create user")?;

        self.user_repository
            .create(ctx, &user)
            .await
            .context("failed to save user")?;

        Ok(RegisterUserResult::new(user.id().to_string(), role))
    }
}
