use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::course::application::inputs::{build_modules, parse_tags};
use crate::modules::course::domain::{Course, CourseLevel, CourseRepository, Domain};
use crate::shared::application::UseCase;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::{command::UpdateCourseCommand, result::UpdateCourseResult};

/// Use case handler for full-replace course updates
pub struct UpdateCourseHandler {
    course_repository: Arc<dyn CourseRepository>,
}

impl UpdateCourseHandler {
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl UseCase<UpdateCourseCommand, UpdateCourseResult> for UpdateCourseHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        command: UpdateCourseCommand,
    ) -> AppResult<UpdateCourseResult> {
        Validator::validate_required("course id", &command.course_id)?;
        Validator::validate_required("teacher id", &command.teacher_id)?;
        Validator::validate_required("course title", &command.title)?;

        let domain = command.domain.parse::<Domain>().context("invalid domain")?;
        let level = command
            .level
            .parse::<CourseLevel>()
            .context("invalid course level")?;
        let tags = parse_tags(&command.tags)?;
        let modules = build_modules(command.modules)?;

        let course = Course::builder(
            command.course_id,
            command.teacher_id,
            command.title,
            domain,
            level,
        )
        .description(command.description)
        .thumbnail(command.thumbnail)
        .duration(command.duration)
        .tags(tags)
        .rating(command.rating)
        .modules(modules)
        .build()
        .context("failed to create course entity")?;

        let exists = self
            .course_repository
            .exists(ctx, course.id())
            .await
            .context("failed to check course existence")?;
        if !exists {
            return Err(AppError::NotFound(format!(
                "course with id '{}' not found",
                course.id()
            )));
        }

        self.course_repository
            .update(ctx, &course)
            .await
            .context("failed to update course")?;

        Ok(UpdateCourseResult::new(
            course.id().to_string(),
            course.lesson_count(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::course::application::inputs::fixtures::*;
    use crate::modules::course::domain::repositories::MockCourseRepository;

    fn command() -> UpdateCourseCommand {
        UpdateCourseCommand {
            course_id: "c1".to_string(),
            teacher_id: "t1".to_string(),
            title: "Rust, revised".to_string(),
            domain: "programming".to_string(),
            level: "intermediate".to_string(),
            rating: 4.2,
            modules: vec![module_input("m1", 1, vec![lesson_input("l1", 1, vec![])])],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn replaces_existing_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_exists().returning(|_, _| Ok(true));
        courses
            .expect_update()
            .withf(|_, course| course.title() == "Rust, revised" && course.rating() == 4.2)
            .times(1)
            .returning(|_, _| Ok(()));

        let result = UpdateCourseHandler::new(Arc::new(courses))
            .execute(&OperationContext::background(), command())
            .await
            .unwrap();

        assert_eq!(result, UpdateCourseResult::new("c1".to_string(), 1));
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let mut courses = MockCourseRepository::new();
        courses.expect_exists().returning(|_, _| Ok(false));
        courses.expect_update().never();

        let err = UpdateCourseHandler::new(Arc::new(courses))
            .execute(&OperationContext::background(), command())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn invalid_tree_never_reaches_storage() {
        let mut courses = MockCourseRepository::new();
        courses.expect_exists().never();
        courses.expect_update().never();

        let mut command = command();
        command.modules[0].lessons.clear();
        let err = UpdateCourseHandler::new(Arc::new(courses))
            .execute(&OperationContext::background(), command)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::ValidationError(
                "failed to create module: a module must have at least one lesson".to_string()
            )
        );
    }

    #[tokio::test]
    async fn storage_failure_is_wrapped() {
        let mut courses = MockCourseRepository::new();
        courses.expect_exists().returning(|_, _| Ok(true));
        courses.expect_update().returning(|_, _| {
            Err(AppError::DatabaseError(
                "Failed to insert lesson 'l1': duplicate key".to_string(),
            ))
        });

        let err = UpdateCourseHandler::new(Arc::new(courses))
            .execute(&OperationContext::background(), command())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::DatabaseError(
                "failed to update course: Failed to insert lesson 'l1': duplicate key".to_string()
            )
        );
    }
}
