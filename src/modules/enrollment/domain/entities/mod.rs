pub mod enrollment;
pub mod progress_record;

pub use enrollment::{Enrollment, EnrollmentTimestamps};
pub use progress_record::{CourseProgress, LessonProgress, ModuleProgress};
