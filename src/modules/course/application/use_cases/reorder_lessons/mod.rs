mod command;
mod handler;

pub use command::ReorderLessonsCommand;
pub use handler::ReorderLessonsHandler;
