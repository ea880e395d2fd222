use serde::Serialize;

use crate::modules::course::domain::{Course, CourseLevel, Domain, Exercise, Lesson, Module, Tag};

/// Read model of a course handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub teacher_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub duration: u32,
    pub domain: Domain,
    pub tags: Vec<Tag>,
    pub rating: f64,
    pub level: CourseLevel,
    pub lesson_count: usize,
    pub modules: Vec<ModuleDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub lessons: Vec<LessonDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub content: String,
    pub video_id: Option<String>,
    pub order: i32,
    pub estimated_minutes: u32,
    pub exercises: Vec<ExerciseDto>,
}

/// Exercise as shown to a learner; the correct answer is deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDto {
    pub id: String,
    pub question: String,
    pub answers: Vec<String>,
    pub order: i32,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            teacher_id: course.teacher_id().to_string(),
            title: course.title().to_string(),
            description: course.description().to_string(),
            thumbnail: course.thumbnail().to_string(),
            duration: course.duration(),
            domain: course.domain(),
            tags: course.tags().iter().copied().collect(),
            rating: course.rating(),
            level: course.level(),
            lesson_count: course.lesson_count(),
            modules: course.modules().iter().map(ModuleDto::from).collect(),
        }
    }
}

impl From<&Module> for ModuleDto {
    fn from(module: &Module) -> Self {
        Self {
            id: module.id().to_string(),
            title: module.title().to_string(),
            order: module.order(),
            lessons: module.lessons().iter().map(LessonDto::from).collect(),
        }
    }
}

impl From<&Lesson> for LessonDto {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().to_string(),
            title: lesson.title().to_string(),
            overview: lesson.overview().to_string(),
            content: lesson.content().to_string(),
            video_id: lesson.has_video().then(|| lesson.video_id().to_string()),
            order: lesson.order(),
            estimated_minutes: lesson.calculate_duration(),
            exercises: lesson.exercises().iter().map(ExerciseDto::from).collect(),
        }
    }
}

impl From<&Exercise> for ExerciseDto {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id().to_string(),
            question: exercise.question().to_string(),
            answers: exercise.answers().to_vec(),
            order: exercise.order(),
        }
    }
}
