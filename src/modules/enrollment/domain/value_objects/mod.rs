pub mod course_outline;
pub mod progress;
pub mod status;

pub use course_outline::{CourseOutline, ModuleOutline};
pub use progress::Progress;
pub use status::Status;
