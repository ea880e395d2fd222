mod handler;
mod query;

pub use handler::GetCourseDetailsHandler;
pub use query::GetCourseDetailsQuery;
