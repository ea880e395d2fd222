pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{
    CourseProgress, Enrollment, EnrollmentTimestamps, LessonProgress, ModuleProgress,
};
pub use repositories::EnrollmentRepository;
pub use value_objects::{CourseOutline, ModuleOutline, Progress, Status};
