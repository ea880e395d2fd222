// Shared mapping utilities
pub mod mapper;
pub mod models;
pub mod persistence;

// Re-export repository implementations
pub use persistence::{CourseRepositoryImpl, LessonRepositoryImpl, ModuleRepositoryImpl};
