pub mod courses_by_teacher;
pub mod create_course;
pub mod delete_course;
pub mod get_all_courses;
pub mod get_course_details;
pub mod get_module_lessons;
pub mod reorder_lessons;
pub mod update_course;

pub use courses_by_teacher::{CoursesByTeacherHandler, CoursesByTeacherQuery};
pub use create_course::{CreateCourseCommand, CreateCourseHandler, CreateCourseResult};
pub use delete_course::{DeleteCourseCommand, DeleteCourseHandler};
pub use get_all_courses::{GetAllCoursesHandler, GetAllCoursesQuery, GetAllCoursesResult};
pub use get_course_details::{GetCourseDetailsHandler, GetCourseDetailsQuery};
pub use get_module_lessons::{GetModuleLessonsHandler, GetModuleLessonsQuery};
pub use reorder_lessons::{ReorderLessonsCommand, ReorderLessonsHandler};
pub use update_course::{UpdateCourseCommand, UpdateCourseHandler, UpdateCourseResult};
