use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::course::application::dto::LessonDto;
use crate::modules::course::domain::{LessonRepository, ModuleRepository};
use crate::shared::application::Query;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::query::GetModuleLessonsQuery;

pub struct GetModuleLessonsHandler {
    module_repository: Arc<dyn ModuleRepository>,
    lesson_repository: Arc<dyn LessonRepository>,
}

impl GetModuleLessonsHandler {
    pub fn new(
        module_repository: Arc<dyn ModuleRepository>,
        lesson_repository: Arc<dyn LessonRepository>,
    ) -> Self {
        Self {
            module_repository,
            lesson_repository,
        }
    }
}

#[async_trait]
impl Query<GetModuleLessonsQuery, Vec<LessonDto>> for GetModuleLessonsHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        query: GetModuleLessonsQuery,
    ) -> AppResult<Vec<LessonDto>> {
        Validator::validate_required("module id", &query.module_id)?;

        if !self.module_repository.exists(ctx, &query.module_id).await? {
            return Err(AppError::NotFound(format!(
                "module with id '{}' not found",
                query.module_id
            )));
        }

        let lessons = self
            .lesson_repository
            .get_by_module_id(ctx, &query.module_id)
            .await
            .context("failed to get module lessons")?;

        Ok(lessons.iter().map(LessonDto::from).collect())
    }
}
