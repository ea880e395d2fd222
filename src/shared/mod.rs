// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Environment configuration
pub mod context; // Cancellation and deadlines
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database, numeric mapping)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use context::OperationContext;
pub use infrastructure::database::Database;
