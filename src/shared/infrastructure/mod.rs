/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod database;
pub mod decimal;

// Re-exports for convenience
pub use database::{run_in_transaction, run_read_only, Database, DbConnection, DbPool, PoolStatus};
