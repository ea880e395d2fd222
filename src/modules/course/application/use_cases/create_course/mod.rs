mod command;
mod handler;
mod result;

pub use command::CreateCourseCommand;
pub use handler::CreateCourseHandler;
pub use result::CreateCourseResult;
