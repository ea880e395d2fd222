use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::course::domain::{entities::Course, repositories::CourseRepository};
use crate::modules::course::infrastructure::mapper::{
    course_from_model, course_to_changeset, course_to_new_model, find_course_row, insert_modules,
    insert_tags,
};
use crate::modules::course::infrastructure::models::CourseModel;
use crate::schema::{course_tags, courses, modules};
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_in_transaction, run_read_only, Database};
use crate::shared::utils::logger::TimedOperation;
use crate::{log_debug, log_info};

pub struct CourseRepositoryImpl {
    db: Arc<Database>,
}

impl CourseRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: load and rebuild every course matching `teacher_id` (or all)
    async fn load_courses(
        &self,
        ctx: &OperationContext,
        teacher_id: Option<String>,
    ) -> AppResult<Vec<Course>> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();

        task::spawn_blocking(move || -> AppResult<Vec<Course>> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| {
                let mut query = courses::table
                    .select(CourseModel::as_select())
                    .order((courses::created_at.asc(), courses::id.asc()))
                    .into_boxed();
                if let Some(teacher_id) = &teacher_id {
                    query = query.filter(courses::teacher_id.eq(teacher_id));
                }

                let rows = query.load::<CourseModel>(conn).map_err(|e| {
                    AppError::DatabaseError(format!("Failed to load courses: {}", e))
                })?;

                log_debug!("Rebuilding {} courses", rows.len());
                rows.into_iter()
                    .map(|row| course_from_model(conn, &ctx, row))
                    .collect()
            })
        })
        .await?
    }
}

// -------------------------------------------------------------------------
// Public API: whole-aggregate writes and reads
// -------------------------------------------------------------------------

#[async_trait]
impl CourseRepository for CourseRepositoryImpl {
    async fn create(&self, ctx: &OperationContext, course: &Course) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let course = course.clone();
        let timer = TimedOperation::new("course_repository.create");

        let course_id = task::spawn_blocking(move || -> AppResult<String> {
            let mut conn = db.get_connection()?;
            run_in_transaction(&mut conn, &ctx, "create course", |conn| {
                let row = course_to_new_model(&course)
                    .map_err(|e| e.context(format!("convert course '{}'", course.id())))?;
                diesel::insert_into(courses::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to insert course '{}': {}",
                            course.id(),
                            e
                        ))
                    })?;

                insert_tags(conn, course.id(), course.tags())?;
                insert_modules(conn, &ctx, course.id(), course.modules())?;
                Ok(course.id().to_string())
            })
        })
        .await??;

        timer.finish_with_info(&course_id);
        log_info!("Created course '{}'", course_id);
        Ok(())
    }

    async fn update(&self, ctx: &OperationContext, course: &Course) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let course = course.clone();
        let timer = TimedOperation::new("course_repository.update");

        let course_id = task::spawn_blocking(move || -> AppResult<String> {
            let mut conn = db.get_connection()?;
            run_in_transaction(&mut conn, &ctx, "update course", |conn| {
                let changeset = course_to_changeset(&course)
                    .map_err(|e| e.context(format!("convert course '{}'", course.id())))?;
                let updated = diesel::update(courses::table.find(course.id()))
                    .set(&changeset)
                    .execute(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to update course '{}': {}",
                            course.id(),
                            e
                        ))
                    })?;
                if updated == 0 {
                    return Err(AppError::NotFound(format!(
                        "course with id '{}' not found",
                        course.id()
                    )));
                }

                // Tags: full replace
                diesel::delete(course_tags::table.filter(course_tags::course_id.eq(course.id())))
                    .execute(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to clear tags for course '{}': {}",
                            course.id(),
                            e
                        ))
                    })?;
                insert_tags(conn, course.id(), course.tags())?;

                ctx.check()?;

                // Subtree: full replace, lessons and exercises cascade
                diesel::delete(modules::table.filter(modules::course_id.eq(course.id())))
                    .execute(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to clear modules for course '{}': {}",
                            course.id(),
                            e
                        ))
                    })?;
                insert_modules(conn, &ctx, course.id(), course.modules())?;
                Ok(course.id().to_string())
            })
        })
        .await??;

        timer.finish_with_info(&course_id);
        log_info!("Updated course '{}'", course_id);
        Ok(())
    }

    async fn delete(&self, ctx: &OperationContext, id: &str) -> AppResult<()> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted = diesel::delete(courses::table.find(&id))
                .execute(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to delete course '{}': {}", id, e))
                })?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "course with id '{}' not found",
                    id
                )));
            }
            log_info!("Deleted course '{}'", id);
            Ok(())
        })
        .await?
    }

    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Course> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<Course> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| {
                let Some(row) = find_course_row(conn, &id)? else {
                    return Err(AppError::NotFound(format!(
                        "course with id '{}' not found",
                        id
                    )));
                };
                course_from_model(conn, &ctx, row)
            })
        })
        .await?
    }

    async fn get_all(&self, ctx: &OperationContext) -> AppResult<Vec<Course>> {
        self.load_courses(ctx, None).await
    }

    async fn get_all_by_teacher_id(
        &self,
        ctx: &OperationContext,
        teacher_id: &str,
    ) -> AppResult<Vec<Course>> {
        self.load_courses(ctx, Some(teacher_id.to_string())).await
    }

    async fn exists(&self, ctx: &OperationContext, id: &str) -> AppResult<bool> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            diesel::select(diesel::dsl::exists(courses::table.find(&id)))
                .get_result::<bool>(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!(
                        "Failed to check course '{}' exists: {}",
                        id, e
                    ))
                })
        })
        .await?
    }
}
