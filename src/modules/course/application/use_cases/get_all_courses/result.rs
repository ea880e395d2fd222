use crate::modules::course::application::dto::CourseDto;

pub type GetAllCoursesResult = Vec<CourseDto>;
