use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::modules::course::domain::{LessonRepository, ModuleRepository};
use crate::shared::application::UseCase;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult, ResultExt};
use crate::shared::utils::Validator;

use super::command::ReorderLessonsCommand;

/// Use case handler for reordering the lessons of one module
pub struct ReorderLessonsHandler {
    module_repository: Arc<dyn ModuleRepository>,
    lesson_repository: Arc<dyn LessonRepository>,
}

impl ReorderLessonsHandler {
    pub fn new(
        module_repository: Arc<dyn ModuleRepository>,
        lesson_repository: Arc<dyn LessonRepository>,
    ) -> Self {
        Self {
            module_repository,
            lesson_repository,
        }
    }

    fn order_map(ordered_lesson_ids: &[String]) -> AppResult<HashMap<String, i32>> {
        if ordered_lesson_ids.is_empty() {
            return Err(AppError::ValidationError(
                "at least one lesson id is required".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(ordered_lesson_ids.len());
        let mut orders = HashMap::with_capacity(ordered_lesson_ids.len());
        for (index, lesson_id) in ordered_lesson_ids.iter().enumerate() {
            Validator::validate_required("lesson id", lesson_id)?;
            if !seen.insert(lesson_id.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "duplicate lesson id '{}'",
                    lesson_id
                )));
            }
            let order = i32::try_from(index + 1).map_err(|_| {
                AppError::ValidationError("too many lessons to reorder".to_string())
            })?;
            orders.insert(lesson_id.clone(), order);
        }
        Ok(orders)
    }
}

#[async_trait]
impl UseCase<ReorderLessonsCommand, ()> for ReorderLessonsHandler {
    async fn execute(
        &self,
        ctx: &OperationContext,
        command: ReorderLessonsCommand,
    ) -> AppResult<()> {
        Validator::validate_required("module id", &command.module_id)?;
        let orders = Self::order_map(&command.ordered_lesson_ids)?;

        let exists = self
            .module_repository
            .exists(ctx, &command.module_id)
            .await
            .context("failed to check module existence")?;
        if !exists {
            return Err(AppError::NotFound(format!(
                "module with id '{}' not found",
                command.module_id
            )));
        }

        self.lesson_repository
            .reorder_lessons(ctx, &command.module_id, &orders)
            .await
            .context("failed to reorder lessons")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::course::domain::repositories::{
        MockLessonRepository, MockModuleRepository,
    };

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[tokio::test]
    async fn assigns_one_based_orders() {
        let mut modules = MockModuleRepository::new();
        modules.expect_exists().returning(|_, _| Ok(true));
        let mut lessons = MockLessonRepository::new();
        lessons
            .expect_reorder_lessons()
            .withf(|_, module_id, orders| {
                module_id == "m1"
                    && orders.len() == 3
                    && orders["l3"] == 1
                    && orders["l1"] == 2
                    && orders["l2"] == 3
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        ReorderLessonsHandler::new(Arc::new(modules), Arc::new(lessons))
            .execute(
                &OperationContext::background(),
                ReorderLessonsCommand::new("m1", ids(&["l3", "l1", "l2"])),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn missing_module_is_not_found() {
        let mut modules = MockModuleRepository::new();
        modules.expect_exists().returning(|_, _| Ok(false));
        let mut lessons = MockLessonRepository::new();
        lessons.expect_reorder_lessons().never();

        let err = ReorderLessonsHandler::new(Arc::new(modules), Arc::new(lessons))
            .execute(
                &OperationContext::background(),
                ReorderLessonsCommand::new("m9", ids(&["l1"])),
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let mut modules = MockModuleRepository::new();
        modules.expect_exists().never();
        let lessons = MockLessonRepository::new();

        let err = ReorderLessonsHandler::new(Arc::new(modules), Arc::new(lessons))
            .execute(
                &OperationContext::background(),
                ReorderLessonsCommand::new("m1", ids(&["l1", "l1"])),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::ValidationError("duplicate lesson id 'l1'".to_string())
        );
    }
}
