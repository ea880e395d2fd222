pub mod dto;
pub mod use_cases;

pub use dto::EnrollmentDto;
pub use use_cases::*;
