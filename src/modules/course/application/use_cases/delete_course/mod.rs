mod command;
mod handler;

pub use command::DeleteCourseCommand;
pub use handler::DeleteCourseHandler;
