use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::course::application::dto::CourseDto;
use crate::modules::course::domain::CourseRepository;
use crate::shared::application::Query;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::query::CoursesByTeacherQuery;

pub struct CoursesByTeacherHandler {
    course_repository: Arc<dyn CourseRepository>,
}

impl CoursesByTeacherHandler {
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl Query<CoursesByTeacherQuery, Vec<CourseDto>> for CoursesByTeacherHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        query: CoursesByTeacherQuery,
    ) -> AppResult<Vec<CourseDto>> {
        Validator::validate_required("teacher id", &query.teacher_id)?;

        let courses = self
            .course_repository
            .get_all_by_teacher_id(ctx, &query.teacher_id)
            .await
            .context("failed to get courses by teacher")?;

        Ok(courses.iter().map(CourseDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::course::domain::repositories::MockCourseRepository;

    #[tokio::test]
    async fn delegates_to_teacher_lookup() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_get_all_by_teacher_id()
            .withf(|_, teacher_id| teacher_id == "t1")
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let result = CoursesByTeacherHandler::new(Arc::new(courses))
            .execute(&OperationContext::background(), CoursesByTeacherQuery::new("t1"))
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn teacher_id_is_required() {
        let mut courses = MockCourseRepository::new();
        courses.expect_get_all_by_teacher_id().never();

        let err = CoursesByTeacherHandler::new(Arc::new(courses))
            .execute(&OperationContext::background(), CoursesByTeacherQuery::new(""))
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }
}
