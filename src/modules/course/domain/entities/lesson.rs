use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

use super::exercise::Exercise;
use super::ordering::ensure_distinct;

const BASE_LESSON_MINUTES: u32 = 10;
const MINUTES_PER_EXERCISE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: String,
    title: String,
    overview: String,
    content: String,
    video_id: String,
    exercises: Vec<Exercise>,
    order: i32,
}

impl Lesson {
    /// Build a lesson. Empty `overview`, `content` and `video_id` mean
    /// "not provided".
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        overview: impl Into<String>,
        content: impl Into<String>,
        video_id: impl Into<String>,
        exercises: Vec<Exercise>,
        order: i32,
    ) -> AppResult<Self> {
        let id = id.into();
        let title = title.into();

        Validator::validate_required("lesson id", &id)?;
        Validator::validate_title("lesson title", &title)?;
        Self::validate_exercises(&exercises)?;

        Ok(Self {
            id,
            title,
            overview: overview.into(),
            content: content.into(),
            video_id: video_id.into(),
            exercises,
            order,
        })
    }

    fn validate_exercises(exercises: &[Exercise]) -> AppResult<()> {
        ensure_distinct("exercise id", exercises.iter().map(Exercise::id))?;
        ensure_distinct("exercise order", exercises.iter().map(Exercise::order))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn has_video(&self) -> bool {
        !self.video_id.is_empty()
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id() == exercise_id)
    }

    pub fn add_exercise(&mut self, exercise: Exercise) -> AppResult<()> {
        let mut exercises = self.exercises.clone();
        exercises.push(exercise);
        Self::validate_exercises(&exercises)?;
        self.exercises = exercises;
        Ok(())
    }

    pub fn remove_exercise(&mut self, exercise_id: &str) -> AppResult<Exercise> {
        let Some(index) = self.exercises.iter().position(|e| e.id() == exercise_id) else {
            return Err(AppError::NotFound(format!(
                "exercise with id '{}' not found",
                exercise_id
            )));
        };
        Ok(self.exercises.remove(index))
    }

    pub fn update_title(&mut self, title: impl Into<String>) -> AppResult<()> {
        let title = title.into();
        Validator::validate_title("lesson title", &title)?;
        self.title = title;
        Ok(())
    }

    pub fn update_overview(&mut self, overview: impl Into<String>) {
        self.overview = overview.into();
    }

    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn update_video_id(&mut self, video_id: impl Into<String>) {
        self.video_id = video_id.into();
    }

    pub fn update_order(&mut self, order: i32) {
        self.order = order;
    }

    /// Estimated minutes: a fixed base plus a little per exercise.
    pub fn calculate_duration(&self) -> u32 {
        BASE_LESSON_MINUTES + MINUTES_PER_EXERCISE * self.exercises.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, order: i32) -> Exercise {
        Exercise::new(id, "q", vec!["a".into(), "b".into()], "a", order).unwrap()
    }

    fn lesson(exercises: Vec<Exercise>) -> Lesson {
        Lesson::new("l1", "Ownership", "", "", "", exercises, 1).unwrap()
    }

    #[test]
    fn has_video_follows_video_id() {
        let mut l = lesson(vec![]);
        assert!(!l.has_video());
        l.update_video_id("yt-123");
        assert!(l.has_video());
    }

    #[test]
    fn rejects_blank_title_and_id() {
        assert!(Lesson::new("l1", " ", "", "", "", vec![], 1).is_err());
        assert!(Lesson::new("", "t", "", "", "", vec![], 1).is_err());
    }

    #[test]
    fn rejects_duplicate_exercise_orders() {
        let err = Lesson::new(
            "l1",
            "t",
            "",
            "",
            "",
            vec![exercise("e1", 1), exercise("e2", 1)],
            1,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn duration_counts_exercises() {
        assert_eq!(lesson(vec![]).calculate_duration(), 10);
        assert_eq!(
            lesson(vec![exercise("e1", 1), exercise("e2", 2)]).calculate_duration(),
            14
        );
    }

    #[test]
    fn add_and_remove_exercises() {
        let mut l = lesson(vec![exercise("e1", 1)]);
        assert!(l.add_exercise(exercise("e1", 2)).is_err());
        assert_eq!(l.exercises().len(), 1);

        l.add_exercise(exercise("e2", 2)).unwrap();
        assert!(l.exercise("e2").is_some());

        let removed = l.remove_exercise("e1").unwrap();
        assert_eq!(removed.id(), "e1");
        assert!(l.remove_exercise("e1").unwrap_err().is_not_found());
    }
}
