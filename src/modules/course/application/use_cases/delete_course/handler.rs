use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::course::domain::CourseRepository;
use crate::shared::application::UseCase;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::command::DeleteCourseCommand;

/// Use case handler for deleting a course
pub struct DeleteCourseHandler {
    course_repository: Arc<dyn CourseRepository>,
}

impl DeleteCourseHandler {
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl UseCase<DeleteCourseCommand, ()> for DeleteCourseHandler {
    async fn execute(&self, ctx: &OperationContext, command: DeleteCourseCommand) -> AppResult<()> {
        Validator::validate_required("course id", &command.course_id)?;

        let exists = self
            .course_repository
            .exists(ctx, &command.course_id)
            .await
            .context("failed to check course existence")?;
        if !exists {
            return Err(AppError::NotFound(format!(
                "course with id '{}' not found",
                command.course_id
            )));
        }

        // modules, lessons and exercises cascade
        self.course_repository
            .delete(ctx, &command.course_id)
            .await
            .context("failed to delete course")
    }
}
