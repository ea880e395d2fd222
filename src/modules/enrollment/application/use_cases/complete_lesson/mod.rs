mod command;
mod handler;
mod result;

pub use command::CompleteLessonCommand;
pub use handler::CompleteLessonHandler;
pub use result::CompleteLessonResult;
