pub mod course_domain;
pub mod course_level;
pub mod tag;

pub use course_domain::Domain;
pub use course_level::CourseLevel;
pub use tag::Tag;
