use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::enrollment::domain::{entities::Enrollment, repositories::EnrollmentRepository};
use crate::modules::enrollment::infrastructure::mapper::{
    delete_progress, enrollment_to_changeset, insert_enrollment, insert_progress, load_enrollment,
};
use crate::modules::enrollment::infrastructure::models::EnrollmentModel;
use crate::schema::enrollments;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_in_transaction, run_read_only, Database};
use crate::shared::utils::logger::TimedOperation;
use crate::{log_debug, log_info};

/// Which enrollments a list read returns
enum EnrollmentScope {
    All,
    User(String),
}

pub struct EnrollmentRepositoryImpl {
    db: Arc<Database>,
}

impl EnrollmentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn load_enrollments(
        &self,
        ctx: &OperationContext,
        scope: EnrollmentScope,
    ) -> AppResult<Vec<Enrollment>> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();

        task::spawn_blocking(move || -> AppResult<Vec<Enrollment>> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| {
                let mut query = enrollments::table
                    .select(EnrollmentModel::as_select())
                    .order((enrollments::enrolled_at.asc(), enrollments::id.asc()))
                    .into_boxed();
                if let EnrollmentScope::User(user_id) = &scope {
                    query = query.filter(enrollments::user_id.eq(user_id));
                }

                let rows = query.load::<EnrollmentModel>(conn).map_err(|e| {
                    AppError::DatabaseError(format!("Failed to load enrollments: {}", e))
                })?;

                log_debug!("Rebuilding {} enrollments", rows.len());
                rows.into_iter()
                    .map(|row| {
                        ctx.check()?;
                        load_enrollment(conn, row)
                    })
                    .collect()
            })
        })
        .await?
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn create(&self, ctx: &OperationContext, enrollment: &Enrollment) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let enrollment = enrollment.clone();
        let timer = TimedOperation::new("enrollment_repository.create");

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            run_in_transaction(&mut conn, &ctx, "create enrollment", |conn| {
                insert_enrollment(conn, &enrollment)?;
                insert_progress(conn, &enrollment)
            })?;

            timer.finish_with_info(enrollment.id());
            log_info!(
                "Enrolled user '{}' in course '{}'",
                enrollment.user_id(),
                enrollment.course_id()
            );
            Ok(())
        })
        .await?
    }

    async fn update(&self, ctx: &OperationContext, enrollment: &Enrollment) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let enrollment = enrollment.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            run_in_transaction(&mut conn, &ctx, "update enrollment", |conn| {
                let changeset = enrollment_to_changeset(&enrollment)?;
                let updated = diesel::update(enrollments::table.find(enrollment.id()))
                    .set(&changeset)
                    .execute(conn)
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to update enrollment '{}': {}",
                            enrollment.id(),
                            e
                        ))
                    })?;
                if updated == 0 {
                    return Err(AppError::NotFound(format!(
                        "enrollment with id '{}' not found",
                        enrollment.id()
                    )));
                }

                // Progress records: full replace
                delete_progress(conn, enrollment.id())?;
                ctx.check()?;
                insert_progress(conn, &enrollment)
            })?;

            log_debug!(
                "Updated enrollment '{}' ({} lesson records)",
                enrollment.id(),
                enrollment.lesson_progress().len()
            );
            Ok(())
        })
        .await?
    }

    async fn delete(&self, ctx: &OperationContext, id: &str) -> AppResult<()> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted = diesel::delete(enrollments::table.find(&id))
                .execute(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to delete enrollment '{}': {}", id, e))
                })?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "enrollment with id '{}' not found",
                    id
                )));
            }
            log_info!("Deleted enrollment '{}'", id);
            Ok(())
        })
        .await?
    }

    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<Enrollment> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<Enrollment> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| {
                let row = enrollments::table
                    .find(&id)
                    .select(EnrollmentModel::as_select())
                    .first(conn)
                    .optional()
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to load enrollment '{}': {}",
                            id, e
                        ))
                    })?;
                let Some(row) = row else {
                    return Err(AppError::NotFound(format!(
                        "enrollment with id '{}' not found",
                        id
                    )));
                };
                load_enrollment(conn, row)
            })
        })
        .await?
    }

    async fn get_all(&self, ctx: &OperationContext) -> AppResult<Vec<Enrollment>> {
        self.load_enrollments(ctx, EnrollmentScope::All).await
    }

    async fn get_by_user_and_course(
        &self,
        ctx: &OperationContext,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Enrollment>> {
        let db = Arc::clone(&self.db);
        let ctx = ctx.clone();
        let user_id = user_id.to_string();
        let course_id = course_id.to_string();

        task::spawn_blocking(move || -> AppResult<Option<Enrollment>> {
            let mut conn = db.get_connection()?;
            run_read_only(&mut conn, &ctx, |conn| {
                let row = enrollments::table
                    .filter(enrollments::user_id.eq(&user_id))
                    .filter(enrollments::course_id.eq(&course_id))
                    .select(EnrollmentModel::as_select())
                    .first(conn)
                    .optional()
                    .map_err(|e| {
                        AppError::DatabaseError(format!(
                            "Failed to load enrollment of user '{}' in course '{}': {}",
                            user_id, course_id, e
                        ))
                    })?;
                row.map(|row| load_enrollment(conn, row)).transpose()
            })
        })
        .await?
    }

    async fn get_all_by_user_id(
        &self,
        ctx: &OperationContext,
        user_id: &str,
    ) -> AppResult<Vec<Enrollment>> {
        self.load_enrollments(ctx, EnrollmentScope::User(user_id.to_string()))
            .await
    }
}
