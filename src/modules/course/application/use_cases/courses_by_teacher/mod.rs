mod handler;
mod query;

pub use handler::CoursesByTeacherHandler;
pub use query::CoursesByTeacherQuery;
