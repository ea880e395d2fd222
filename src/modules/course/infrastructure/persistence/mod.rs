pub mod course_repository_impl;
pub mod lesson_repository_impl;
pub mod module_repository_impl;

pub use course_repository_impl::CourseRepositoryImpl;
pub use lesson_repository_impl::LessonRepositoryImpl;
pub use module_repository_impl::ModuleRepositoryImpl;
