use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::modules::enrollment::domain::value_objects::{CourseOutline, Progress, Status};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

use super::progress_record::{CourseProgress, LessonProgress, ModuleProgress};

/// Timestamps of an enrollment as stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrollmentTimestamps {
    pub enrolled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// A learner's registration in a course, with every progress record.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    id: String,
    user_id: String,
    course_id: String,
    enrolled_at: DateTime<Utc>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    course_progress: CourseProgress,
    module_progress: Vec<ModuleProgress>,
    lesson_progress: Vec<LessonProgress>,
}

impl Enrollment {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        course_id: impl Into<String>,
    ) -> AppResult<Self> {
        let id = id.into();
        let user_id = user_id.into();
        let course_id = course_id.into();
        Self::validate_ids(&id, &user_id, &course_id)?;

        Ok(Self {
            id,
            user_id,
            course_id,
            enrolled_at: Utc::now(),
            started_at: None,
            completed_at: None,
            course_progress: CourseProgress::default(),
            module_progress: Vec::new(),
            lesson_progress: Vec::new(),
        })
    }

    /// Rebuild an enrollment from storage, keeping every progress record as is.
    pub fn restore(
        id: impl Into<String>,
        user_id: impl Into<String>,
        course_id: impl Into<String>,
        timestamps: EnrollmentTimestamps,
        course_progress: CourseProgress,
        module_progress: Vec<ModuleProgress>,
        lesson_progress: Vec<LessonProgress>,
    ) -> AppResult<Self> {
        let id = id.into();
        let user_id = user_id.into();
        let course_id = course_id.into();
        Self::validate_ids(&id, &user_id, &course_id)?;

        let mut seen = HashSet::new();
        if let Some(dup) = module_progress.iter().find(|m| !seen.insert(m.module_id())) {
            return Err(AppError::ValidationError(format!(
                "duplicate progress for module '{}'",
                dup.module_id()
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = lesson_progress.iter().find(|l| !seen.insert(l.lesson_id())) {
            return Err(AppError::ValidationError(format!(
                "duplicate progress for lesson '{}'",
                dup.lesson_id()
            )));
        }

        Ok(Self {
            id,
            user_id,
            course_id,
            enrolled_at: timestamps.enrolled_at,
            started_at: timestamps.started_at,
            completed_at: timestamps.completed_at,
            course_progress,
            module_progress,
            lesson_progress,
        })
    }

    fn validate_ids(id: &str, user_id: &str, course_id: &str) -> AppResult<()> {
        Validator::validate_required("enrollment id", id)?;
        Validator::validate_required("user id", user_id)?;
        Validator::validate_required("course id", course_id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn timestamps(&self) -> EnrollmentTimestamps {
        EnrollmentTimestamps {
            enrolled_at: self.enrolled_at,
            started_at: self.started_at,
            completed_at: self.completed_at,
        }
    }

    pub fn course_progress(&self) -> CourseProgress {
        self.course_progress
    }

    pub fn module_progress(&self) -> &[ModuleProgress] {
        &self.module_progress
    }

    pub fn lesson_progress(&self) -> &[LessonProgress] {
        &self.lesson_progress
    }

    pub fn lesson_progress_for(&self, lesson_id: &str) -> Option<&LessonProgress> {
        self.lesson_progress.iter().find(|lp| lp.lesson_id() == lesson_id)
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    fn lesson_entry(&mut self, lesson_id: &str) -> &mut LessonProgress {
        let index = match self
            .lesson_progress
            .iter()
            .position(|lp| lp.lesson_id() == lesson_id)
        {
            Some(index) => index,
            None => {
                self.lesson_progress
                    .push(LessonProgress::started(lesson_id.to_string()));
                self.lesson_progress.len() - 1
            }
        };
        &mut self.lesson_progress[index]
    }

    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }
    }

    /// Mark a lesson completed. The first completion also starts the enrollment.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> AppResult<()> {
        Validator::validate_required("lesson id", lesson_id)?;
        self.lesson_entry(lesson_id).mark_completed();
        self.mark_started();
        Ok(())
    }

    pub fn record_exercise_score(&mut self, lesson_id: &str, score: f64) -> AppResult<()> {
        Validator::validate_required("lesson id", lesson_id)?;
        Validator::validate_percentage(score)?;
        self.lesson_entry(lesson_id).update_exercise_score(score);
        self.mark_started();
        Ok(())
    }

    /// Recompute module and course progress against the current course outline.
    ///
    /// Module records are rebuilt for exactly the outline's modules. The
    /// enrollment is completed when every outline lesson is completed and
    /// loses its completion date when lessons are added later.
    pub fn recalculate_progress(&mut self, outline: &CourseOutline) {
        let completed: HashSet<&str> = self
            .lesson_progress
            .iter()
            .filter(|lp| lp.is_completed())
            .map(|lp| lp.lesson_id())
            .collect();
        let touched: HashSet<&str> = self
            .lesson_progress
            .iter()
            .map(|lp| lp.lesson_id())
            .collect();

        let mut module_progress = Vec::with_capacity(outline.modules().len());
        let mut done_total = 0;
        for module in outline.modules() {
            let done = module
                .lesson_ids
                .iter()
                .filter(|id| completed.contains(id.as_str()))
                .count();
            let any_touched = module
                .lesson_ids
                .iter()
                .any(|id| touched.contains(id.as_str()));
            done_total += done;
            module_progress.push(ModuleProgress::from_parts(
                module.module_id.clone(),
                Progress::from_ratio(done, module.lesson_ids.len(), any_touched),
            ));
        }
        self.module_progress = module_progress;

        let total = outline.lesson_count();
        let course = if total == 0 || (done_total == 0 && !self.is_started()) {
            Progress::enrolled()
        } else {
            Progress::from_ratio(done_total, total, !touched.is_empty())
        };
        self.course_progress.set(course);

        if course.status() == Status::Completed {
            if self.completed_at.is_none() {
                self.completed_at = Some(Utc::now());
            }
        } else {
            self.completed_at = None;
        }
    }
}
