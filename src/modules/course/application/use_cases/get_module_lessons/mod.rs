mod handler;
mod query;

pub use handler::GetModuleLessonsHandler;
pub use query::GetModuleLessonsQuery;
