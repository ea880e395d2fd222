use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_info;
use crate::modules::course::domain::{entities::Lesson, repositories::LessonRepository};
use crate::modules::course::infrastructure::mapper::{
    lesson_from_model, load_lessons, validate_reorder,
};
use crate::modules::course::infrastructure::models::LessonModel;
use crate::schema::lessons;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_in_transaction, run_read_only, Database};

pub struct LessonRepositoryImpl {
    db: Arc<Database>,
}

impl LessonRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LessonRepository for LessonRepositoryImpl {
    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Lesson> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<Lesson> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| {
                let row = lessons::table
                    .find(&id)
                    .select(LessonModel::as_select())
                    .first(conn)
                    .optional()
                    .map_err(|e| {
                        AppError::DatabaseError(format!("Failed to load lesson '{}': {}", id, e))
                    })?;
                let Some(row) = row else {
                    return Err(AppError::NotFound(format!(
                        "lesson with id '{}' not found",
                        id
                    )));
                };
                lesson_from_model(conn, row)
            })
        })
        .await?
    }

    async fn get_by_module_id(
        &self,
        ctx: &OperationContext,
        module_id: &str,
    ) -> AppResult<Vec<Lesson>> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let module_id = module_id.to_string();

        task::spawn_blocking(move || -> AppResult<Vec<Lesson>> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| load_lessons(conn, &ctx, &module_id))
        })
        .await?
    }

    async fn exists(&self, ctx: &OperationContext, id: &str) -> AppResult<bool> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            diesel::select(diesel::dsl::exists(lessons::table.find(&id)))
                .get_result::<bool>(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!(
                        "Failed to check lesson '{}' exists: {}",
                        id, e
                    ))
                })
        })
        .await?
    }

    async fn update_order(&self, ctx: &OperationContext, id: &str, order: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // the deferred unique constraint is checked at commit
            run_in_transaction(&mut conn, &ctx, "update lesson order", |conn| {
                let updated = diesel::update(lessons::table.find(&id))
                    .set(lessons::order_index.eq(order))
                    .execute(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to update order of lesson '{}': {}",
                            id, e
                        ))
                    })?;
                if updated == 0 {
                    return Err(AppError::NotFound(format!(
                        "lesson with id '{}' not found",
                        id
                    )));
                }
                Ok(())
            })
        })
        .await?
    }

    async fn reorder_lessons(
        &self,
        ctx: &OperationContext,
        module_id: &str,
        orders: &HashMap<String, i32>,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let module_id = module_id.to_string();
        let orders = orders.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            run_in_transaction(&mut conn, &ctx, "reorder lessons", |conn| {
                let existing: Vec<String> = lessons::table
                    .filter(lessons::module_id.eq(&module_id))
                    .select(lessons::id)
                    .for_update()
                    .load(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to load lessons for module '{}': {}",
                            module_id, e
                        ))
                    })?;
                if existing.is_empty() {
                    return Err(AppError::NotFound(format!(
                        "module with id '{}' has no lessons",
                        module_id
                    )));
                }
                validate_reorder("lesson", &module_id, &existing, &orders)?;

                for (lesson_id, order) in &orders {
                    ctx.check()?;
                    diesel::update(lessons::table.find(lesson_id))
                        .set(lessons::order_index.eq(*order))
                        .execute(conn)
                        .map_err(|e| {
                            AppError::DatabaseError(format!(
                                "Failed to reorder lesson '{}': {}",
                                lesson_id, e
                            ))
                        })?;
                }
                Ok(())
            })?;

            log_info!(
                "Reordered {} lessons of module '{}'",
                orders.len(),
                module_id
            );
            Ok(())
        })
        .await?
    }
}
