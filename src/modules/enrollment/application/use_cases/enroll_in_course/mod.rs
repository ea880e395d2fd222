mod command;
mod handler;
mod result;

pub use command::EnrollInCourseCommand;
pub use handler::EnrollInCourseHandler;
pub use result::EnrollInCourseResult;
