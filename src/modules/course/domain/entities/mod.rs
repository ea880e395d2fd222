pub mod course;
pub mod exercise;
pub mod lesson;
pub mod module;
mod ordering;

pub use course::{Course, CourseBuilder};
pub use exercise::Exercise;
pub use lesson::Lesson;
pub use module::Module;
