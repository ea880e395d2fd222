pub mod complete_lesson;
pub mod enroll_in_course;
pub mod get_my_enrollments;

pub use complete_lesson::{CompleteLessonCommand, CompleteLessonHandler, CompleteLessonResult};
pub use enroll_in_course::{EnrollInCourseCommand, EnrollInCourseHandler, EnrollInCourseResult};
pub use get_my_enrollments::{GetMyEnrollmentsHandler, GetMyEnrollmentsQuery};
