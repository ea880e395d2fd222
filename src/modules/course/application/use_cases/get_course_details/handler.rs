use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::course::application::dto::CourseDto;
use crate::modules::course::domain::CourseRepository;
use crate::shared::application::Query;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::query::GetCourseDetailsQuery;

pub struct GetCourseDetailsHandler {
    course_repository: Arc<dyn CourseRepository>,
}

impl GetCourseDetailsHandler {
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl Query<GetCourseDetailsQuery, CourseDto> for GetCourseDetailsHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        query: GetCourseDetailsQuery,
    ) -> AppResult<CourseDto> {
        Validator::validate_required("course id", &query.course_id)?;

        let course = self
            .course_repository
            .get(ctx, &query.course_id)
            .await
            .context("failed to get course details")?;

        Ok(CourseDto::from(&course))
    }
}
