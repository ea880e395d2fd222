use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::course::domain::CourseRepository;
use crate::modules::enrollment::domain::{CourseOutline, EnrollmentRepository};
use crate::shared::application::UseCase;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::{command::CompleteLessonCommand, result::CompleteLessonResult};

/// Use case handler for completing a lesson
pub struct CompleteLessonHandler {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    course_repository: Arc<dyn CourseRepository>,
}

impl CompleteLessonHandler {
    pub fn new(
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        course_repository: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            enrollment_repository,
            course_repository,
        }
    }
}

#[async_trait]
impl UseCase<CompleteLessonCommand, CompleteLessonResult> for CompleteLessonHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        command: CompleteLessonCommand,
    ) -> AppResult<CompleteLessonResult> {
        Validator::validate_required("user id", &command.user_id)?;
        Validator::validate_required("course id", &command.course_id)?;
        Validator::validate_required("lesson id", &command.lesson_id)?;

        let Some(mut enrollment) = self
            .enrollment_repository
            .get_by_user_and_course(ctx, &command.user_id, &command.course_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "user '{}' is not enrolled in course '{}'",
                command.user_id, command.course_id
            )));
        };

        let course = self
            .course_repository
            .get(ctx, &command.course_id)
            .await
            .context("course not found")?;
        let outline = CourseOutline::from(&course);
        if !outline.contains_lesson(&command.lesson_id) {
            return Err(AppError::NotFound(format!(
                "lesson '{}' is not part of course '{}'",
                command.lesson_id, command.course_id
            )));
        }

        enrollment
            .complete_lesson(&command.lesson_id)
            .context("failed to complete lesson")?;
        enrollment.recalculate_progress(&outline);

        self.enrollment_repository
            .update(ctx, &enrollment)
            .await
            .context("failed to update enrollment")?;

        if enrollment.is_completed() {
            log_info!(
                "User '{}' completed course '{}'",
                enrollment.user_id(),
                enrollment.course_id()
            );
        }

        Ok(CompleteLessonResult {
            enrollment_id: enrollment.id().to_string(),
            course_progress: enrollment.course_progress().progress().percentage(),
            course_completed: enrollment.is_completed(),
        })
    }
}
