mod handler;
mod query;

pub use handler::GetMyEnrollmentsHandler;
pub use query::GetMyEnrollmentsQuery;
