use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::course::domain::CourseRepository;
use crate::modules::enrollment::domain::{Enrollment, EnrollmentRepository};
use crate::modules::user::domain::UserRepository;
use crate::shared::application::UseCase;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::{command::EnrollInCourseCommand, result::EnrollInCourseResult};

/// Use case handler for enrolling a student in a course
pub struct EnrollInCourseHandler {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    course_repository: Arc<dyn CourseRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl EnrollInCourseHandler {
    pub fn new(
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        course_repository: Arc<dyn CourseRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            enrollment_repository,
            course_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl UseCase<EnrollInCourseCommand, EnrollInCourseResult> for EnrollInCourseHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        command: EnrollInCourseCommand,
    ) -> AppResult<EnrollInCourseResult> {
        let enrollment_id = Validator::resolve_id("enrollment id", command.enrollment_id)?;
        let enrollment = Enrollment::new(enrollment_id, command.user_id, command.course_id)
            .context("failed to create enrollment")?;

        let student = self
            .user_repository
            .get(ctx, enrollment.user_id())
            .await
            .context("user not found")?;
        if !student.can_enroll() {
            return Err(AppError::Unauthorized(
                "only students can enroll in courses".to_string(),
            ));
        }

        let course_exists = self
            .course_repository
            .exists(ctx, enrollment.course_id())
            .await
            .context("failed to check course existence")?;
        if !course_exists {
            return Err(AppError::NotFound(format!(
                "course with id '{}' not found",
                enrollment.course_id()
            )));
        }

        let existing = self
            .enrollment_repository
            .get_by_user_and_course(ctx, enrollment.user_id(), enrollment.course_id())
            .await?;
        if existing.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "user '{}' is already enrolled in course '{}'",
                enrollment.user_id(),
                enrollment.course_id()
            )));
        }

        self.enrollment_repository
            .create(ctx, &enrollment)
            .await
            .context("failed to save enrollment")?;

        Ok(EnrollInCourseResult::new(enrollment.id().to_string()))
    }
}
