pub mod dto;
pub mod inputs;
pub mod use_cases;

pub use dto::{CourseDto, ExerciseDto, LessonDto, ModuleDto};
pub use inputs::{ExerciseInput, LessonInput, ModuleInput};
pub use use_cases::*;
