pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Course, CourseBuilder, Exercise, Lesson, Module};
pub use repositories::{CourseRepository, LessonRepository, ModuleRepository};
pub use value_objects::{CourseLevel, Domain, Tag};
