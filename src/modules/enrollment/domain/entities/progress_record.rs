use serde::Serialize;

use crate::modules::enrollment::domain::value_objects::{Progress, Status};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CourseProgress {
    progress: Progress,
}

impl CourseProgress {
    pub fn new(progress: Progress) -> Self {
        Self { progress }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub(crate) fn set(&mut self, progress: Progress) {
        self.progress = progress;
    }
}

impl Default for CourseProgress {
    fn default() -> Self {
        Self::new(Progress::enrolled())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    module_id: String,
    progress: Progress,
}

impl ModuleProgress {
    pub fn new(module_id: impl Into<String>, progress: Progress) -> AppResult<Self> {
        let module_id = module_id.into();
        Validator::validate_required("module id", &module_id)?;
        Ok(Self {
            module_id,
            progress,
        })
    }

    pub(crate) fn from_parts(module_id: String, progress: Progress) -> Self {
        Self {
            module_id,
            progress,
        }
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    lesson_id: String,
    progress: Progress,
    exercise_score: f64,
}

impl LessonProgress {
    pub fn new(
        lesson_id: impl Into<String>,
        progress: Progress,
        exercise_score: f64,
    ) -> AppResult<Self> {
        let lesson_id = lesson_id.into();
        Validator::validate_required("lesson id", &lesson_id)?;
        Validator::validate_percentage(exercise_score)?;
        Ok(Self {
            lesson_id,
            progress,
            exercise_score,
        })
    }

    pub(crate) fn started(lesson_id: String) -> Self {
        Self {
            lesson_id,
            progress: Progress::started(),
            exercise_score: 0.0,
        }
    }

    pub fn lesson_id(&self) -> &str {
        &self.lesson_id
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn exercise_score(&self) -> f64 {
        self.exercise_score
    }

    pub fn is_completed(&self) -> bool {
        self.progress.is_completed()
    }

    pub(crate) fn mark_completed(&mut self) {
        self.progress = Progress::completed();
    }

    pub(crate) fn update_exercise_score(&mut self, score: f64) {
        self.exercise_score = score;
        if self.progress.status() == Status::Started {
            self.progress = Progress::from_ratio(0, 1, true);
        }
    }
}
