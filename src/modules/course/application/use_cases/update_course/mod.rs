mod command;
mod handler;
mod result;

pub use command::UpdateCourseCommand;
pub use handler::UpdateCourseHandler;
pub use result::UpdateCourseResult;
