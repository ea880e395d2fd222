use crate::modules::course::domain::{Exercise, Lesson, Module, Tag};
use crate::shared::errors::{AppResult, ResultExt};
use crate::shared::utils::Validator;

/// Plain input for one module of a course tree. Missing ids are generated.
#[derive(Debug, Clone, Default)]
pub struct ModuleInput {
    pub module_id: Option<String>,
    pub title: String,
    pub lessons: Vec<LessonInput>,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct LessonInput {
    pub lesson_id: Option<String>,
    pub title: String,
    pub overview: String,
    pub content: String,
    pub video_id: String,
    pub exercises: Vec<ExerciseInput>,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseInput {
    pub exercise_id: Option<String>,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub order: i32,
}

/// Parse tag names; the first unknown name fails the whole list.
pub(crate) fn parse_tags(tags: &[String]) -> AppResult<Vec<Tag>> {
    tags.iter()
        .map(|tag| tag.parse::<Tag>().context(format!("invalid tag: {}", tag)))
        .collect()
}

/// Build the module tree bottom-up so each level is validated before its parent.
pub(crate) fn build_modules(inputs: Vec<ModuleInput>) -> AppResult<Vec<Module>> {
    inputs.into_iter().map(build_module).collect()
}

fn build_module(input: ModuleInput) -> AppResult<Module> {
    let module_id = Validator::resolve_id("module id", input.module_id)?;
    let lessons = input
        .lessons
        .into_iter()
        .map(build_lesson)
        .collect::<AppResult<Vec<_>>>()
        .context("failed to create module")?;

    Module::new(module_id, input.title, lessons, input.order).context("failed to create module")
}

fn build_lesson(input: LessonInput) -> AppResult<Lesson> {
    let lesson_id = Validator::resolve_id("lesson id", input.lesson_id)?;
    let exercises = input
        .exercises
        .into_iter()
        .map(build_exercise)
        .collect::<AppResult<Vec<_>>>()
        .context("failed to create lesson")?;

    Lesson::new(
        lesson_id,
        input.title,
        input.overview,
        input.content,
        input.video_id,
        exercises,
        input.order,
    )
    .context("failed to create lesson")
}

fn build_exercise(input: ExerciseInput) -> AppResult<Exercise> {
    let exercise_id = Validator::resolve_id("exercise id", input.exercise_id)?;
    Exercise::new(
        exercise_id,
        input.question,
        input.answers,
        input.correct_answer,
        input.order,
    )
    .context("failed to create exercise")
}
