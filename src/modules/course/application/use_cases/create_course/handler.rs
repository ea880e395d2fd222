use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::course::application::inputs::{build_modules, parse_tags};
use crate::modules::course::domain::{Course, CourseLevel, CourseRepository, Domain};
use crate::modules::user::domain::UserRepository;
use crate::shared::application::UseCase;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::{command::CreateCourseCommand, result::CreateCourseResult};

/// Use case handler for creating a course
pub struct CreateCourseHandler {
    course_repository: Arc<dyn CourseRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CreateCourseHandler {
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            course_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateCourseCommand, CreateCourseResult> for CreateCourseHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        command: CreateCourseCommand,
    ) -> AppResult<CreateCourseResult> {
        let course_id = Validator::resolve_id("course id", command.course_id)?;
        Validator::validate_required("teacher id", &command.teacher_id)?;
        Validator::validate_required("course title", &command.title)?;

        let domain = command.domain.parse::<Domain>().context("invalid domain")?;
        let level = command
            .level
            .parse::<CourseLevel>()
            .context("invalid course level")?;
        let tags = parse_tags(&command.tags)?;
        let modules = build_modules(command.modules)?;

        // The whole tree is valid before any I/O happens
        let course = Course::builder(course_id, command.teacher_id, command.title, domain, level)
            .description(command.description)
            .thumbnail(command.thumbnail)
            .duration(command.duration)
            .tags(tags)
            .rating(command.rating.unwrap_or(0.0))
            .modules(modules)
            .build()
            .context("failed to create course")?;

        let teacher = self
            .user_repository
            .get(ctx, course.teacher_id())
            .await
            .context("teacher not found")?;
        if !teacher.can_teach() {
            return Err(AppError::Unauthorized(format!(
                "user '{}' is not authorized to create courses",
                teacher.id()
            )));
        }

        self.course_repository
            .create(ctx, &course)
            .await
            .context("failed to save course")?;

        log_debug!(
            "Course '{}' created with {} modules",
            course.id(),
            course.modules().len()
        );
        Ok(CreateCourseResult::new(
            course.id().to_string(),
            course.modules().len(),
            course.lesson_count(),
        ))
    }
}
