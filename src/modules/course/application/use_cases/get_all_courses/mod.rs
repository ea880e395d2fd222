mod handler;
mod query;
mod result;

pub use handler::GetAllCoursesHandler;
pub use query::GetAllCoursesQuery;
pub use result::GetAllCoursesResult;
