use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;

use crate::log_info;
use crate::modules::user::domain::{entities::User, repositories::UserRepository};
use crate::modules::user::infrastructure::models::{NewUser, UserChangeset, UserModel};
use crate::schema::users;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: map write failures, surfacing unique violations as AlreadyExists
    fn write_error(action: &str, id: &str, err: DieselError) -> AppError {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::AlreadyExists(format!(
                    "user '{}' conflicts with an existing user: {}",
                    id,
                    info.message()
                ))
            }
            other => {
                AppError::DatabaseError(format!("Failed to {} user '{}': {}", action, id, other))
            }
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, ctx: &OperationContext, user: &User) -> AppResult<()> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let user = user.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(users::table)
                .values(&NewUser::from(&user))
                .execute(&mut conn)
                .map_err(|e| Self::write_error("insert", user.id(), e))?;
            log_info!("Created user '{}' ({})", user.id(), user.role());
            Ok(())
        })
        .await?
    }

    async fn update(&self, ctx: &OperationContext, user: &User) -> AppResult<()> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let user = user.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(users::table.find(user.id()))
                .set(&UserChangeset::from(&user))
                .execute(&mut conn)
                .map_err(|e| Self::write_error("update", user.id(), e))?;
            if updated == 0 {
                return Err(AppError::NotFound(format!(
                    "user with id '{}' not found",
                    user.id()
                )));
            }
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
            let deleted = diesel::delete(users::table.find(&id))
                .execute(&mut conn)
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to delete user '{}': {}", id, e))
                })?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!("user with id '{}' not found", id)));
            }
            Ok(())
        })
        .await?
    }

    async fn get(&self, ctx: &OperationContext, id: &str) -> AppResult<User> {
        ctx.check()?;
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        let row = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            users::table
                .find(&id)
                .select(UserModel::as_select())
                .first(&mut conn)
                .optional()
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to load user '{}': {}", id, e))
                })
        })
        .await??;

        match row {
            Some(row) => row.to_user(),
            None => Err(AppError::NotFound("user not found".to_string())),
        }
    }

    async fn get_all(&self, ctx: &OperationContext) -> AppResult<Vec<User>> {
        ctx.check()?;
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<UserModel>> {
            let mut conn = db.get_connection()?;
            users::table
                .order(users::created_at.asc())
                .select(UserModel::as_select())
                .load(&mut conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to load users: {}", e)))
        })
        .await??;

        rows.into_iter().map(UserModel::to_user).collect()
    }
}
