pub mod course_repository;
pub mod lesson_repository;
pub mod module_repository;

pub use course_repository::CourseRepository;
pub use lesson_repository::LessonRepository;
pub use module_repository::ModuleRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use lesson_repository::MockLessonRepository;
#[cfg(test)]
pub use module_repository::MockModuleRepository;
