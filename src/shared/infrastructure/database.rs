use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::shared::config::DatabaseConfig;
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_error, log_info, log_warn};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Owned handle to the connection pool. Built once at startup, shared as
/// `Arc<Database>` with every repository and closed once at shutdown.
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
    closed: AtomicBool,
}

impl Database {
    pub fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        log_info!(
            "Initializing database connection to: {}",
            config.redacted_host()
        );

        let manager = ConnectionManager::<PgConnection>::new(config.url.clone());
        let pool = r2d2::Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_idle))
            // Connection timeouts
            .connection_timeout(config.connect_timeout) // Time to wait for connection from pool
            .idle_timeout(Some(config.idle_timeout))
            .max_lifetime(Some(config.max_lifetime))
            // Connection health checks
            .test_on_check_out(true) // Test connections when borrowed from pool
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}, min_idle: {}",
            pool.max_size(),
            config.min_idle
        );

        Ok(Self::from_pool(pool))
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            pool,
            closed: AtomicBool::new(false),
        }
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        if self.is_closed() {
            log_error!("Connection requested after the pool was closed");
            return Err(AppError::DatabaseError(
                "Connection pool has been closed".to_string(),
            ));
        }

        let start = Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Apply every embedded migration that has not run yet.
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        for version in &applied {
            log_info!("Applied migration {}", version);
        }
        Ok(applied.len())
    }

    /// Get pool statistics for monitoring
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }

    /// Get the underlying connection pool (useful for testing and repository initialization)
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Stop handing out connections. Idle connections are released when the
    /// last handle to the pool is dropped. Returns false if already closed.
    pub fn close(&self) -> bool {
        if self.closed.swap(true, Ordering::AcqRel) {
            log_warn!("Database pool close requested twice");
            return false;
        }
        let status = self.pool_status();
        log_info!(
            "Database pool closed ({} connections, {} idle)",
            status.connections,
            status.idle_connections
        );
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}

/// Run several reads against one consistent snapshot (read-only,
/// repeatable read), so a tree is never assembled from two versions.
pub fn run_read_only<T, F>(conn: &mut PgConnection, ctx: &OperationContext, work: F) -> AppResult<T>
where
    F: FnOnce(&mut PgConnection) -> AppResult<T>,
{
    ctx.check()?;
    conn.build_transaction()
        .read_only()
        .repeatable_read()
        .run::<T, AppError, _>(work)
}

/// Distinguishes failures raised by the work inside a transaction from
/// failures of the transaction itself (begin, commit).
enum TransactionFailure {
    Operation(AppError),
    Storage(diesel::result::Error),
}

impl From<diesel::result::Error> for TransactionFailure {
    fn from(err: diesel::result::Error) -> Self {
        TransactionFailure::Storage(err)
    }
}

/// Run `work` inside one database transaction.
///
/// The context is checked before BEGIN and again right before COMMIT; a
/// cancelled or expired context makes the closure fail, so every write is
/// rolled back. Errors are labelled with `operation`.
pub fn run_in_transaction<T, F>(
    conn: &mut PgConnection,
    ctx: &OperationContext,
    operation: &str,
    work: F,
) -> AppResult<T>
where
    F: FnOnce(&mut PgConnection) -> AppResult<T>,
{
    ctx.check().map_err(|e| e.context(operation))?;

    LogContext::db_operation(operation, "transaction", None);
    let started = Instant::now();

    let result = conn.transaction::<T, TransactionFailure, _>(|conn| {
        let value = work(conn).map_err(TransactionFailure::Operation)?;
        ctx.check()
            .map_err(|e| TransactionFailure::Operation(e.context("before commit")))?;
        Ok(value)
    });

    match result {
        Ok(value) => {
            LogContext::db_operation(
                operation,
                "transaction",
                Some(started.elapsed().as_millis() as u64),
            );
            Ok(value)
        }
        Err(TransactionFailure::Operation(err)) => {
            LogContext::rollback(operation, &err);
            Err(err.context(operation))
        }
        Err(TransactionFailure::Storage(err)) => {
            LogContext::rollback(operation, &err);
            Err(AppError::DatabaseError(format!(
                "{}: transaction begin/commit failed: {}",
                operation, err
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Never connects: no idle connections are requested up front.
    fn unconnected() -> Database {
        let manager = ConnectionManager::<PgConnection>::new("postgres://nobody@localhost:1/none");
        let pool = Pool::builder()
            .max_size(1)
            .min_idle(Some(0))
            .build_unchecked(manager);
        Database::from_pool(pool)
    }

    #[test]
    fn closed_pool_refuses_connections() {
        let db = unconnected();
        assert!(!db.is_closed());

        assert!(db.close());
        assert!(db.is_closed());
        assert!(!db.close());

        let err = db.get_connection().err().unwrap();
        assert_eq!(
            err,
            AppError::DatabaseError("Connection pool has been closed".to_string())
        );
    }
}
