use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_info;
use crate::modules::course::domain::{entities::Module, repositories::ModuleRepository};
use crate::modules::course::infrastructure::mapper::{
    load_modules, module_from_model, validate_reorder,
};
use crate::modules::course::infrastructure::models::ModuleModel;
use crate::schema::modules;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_in_transaction, run_read_only, Database};

pub struct ModuleRepositoryImpl {
    db: Arc<Database>,
}

impl ModuleRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ModuleRepository for ModuleRepositoryImpl {
    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Module> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<Module> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| {
                let row = modules::table
                    .find(&id)
                    .select(ModuleModel::as_select())
                    .first(conn)
                    .optional()
                    .map_err(|e| {
                        AppError::DatabaseError(format!("Failed to load module '{}': {}", id, e))
                    })?;
                let Some(row) = row else {
                    return Err(AppError::NotFound(format!(
                        "module with id '{}' not found",
                        id
                    )));
                };
                module_from_model(conn, &ctx, row)
            })
        })
        .await?
    }

    async fn get_by_course_id(
        &self,
        ctx: &OperationContext,
        course_id: &str,
    ) -> AppResult<Vec<Module>> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let course_id = course_id.to_string();

        task::spawn_blocking(move || -> AppResult<Vec<Module>> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| load_modules(conn, &ctx, &course_id))
        })
        .await?
    }

    async fn exists(&self, ctx: &OperationContext, id: &str) -> AppResult<bool> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            diesel::select(diesel::dsl::exists(modules::table.find(&id)))
                .get_result::<bool>(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!(
                        "Failed to check module '{}' exists: {}",
                        id, e
                    ))
                })
        })
        .await?
    }

    async fn reorder_modules(
        &self,
        ctx: &OperationContext,
        course_id: &str,
        orders: &HashMap<String, i32>,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let course_id = course_id.to_string();
        let orders = orders.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            run_in_transaction(&mut conn, &ctx, "reorder modules", |conn| {
                let existing: Vec<String> = modules::table
                    .filter(modules::course_id.eq(&course_id))
                    .select(modules::id)
                    .for_update()
                    .load(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to load modules for course '{}': {}",
                            course_id, e
                        ))
                    })?;
                validate_reorder("module", &course_id, &existing, &orders)?;

                for (module_id, order) in &orders {
                    diesel::update(modules::table.find(module_id))
                        .set(modules::order_index.eq(*order))
                        .execute(conn)
                        .map_err(|e| {
                            AppError::DatabaseError(format!(
                                "Failed to reorder module '{}': {}",
                                module_id, e
                            ))
                        })?;
                }
                Ok(())
            })?;

            log_info!("Reordered {} modules of course '{}'", orders.len(), course_id);
            Ok(())
        })
        .await?
    }
}
