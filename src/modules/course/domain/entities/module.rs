use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

use super::lesson::Lesson;
use super::ordering::{ensure_distinct, reorder_by_ids};

/// A chapter of a course. Always holds at least one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: String,
    title: String,
    lessons: Vec<Lesson>,
    order: i32,
}

impl Module {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        lessons: Vec<Lesson>,
        order: i32,
    ) -> AppResult<Self> {
        let id = id.into();
        let title = title.into();

        Validator::validate_required("module id", &id)?;
        Validator::validate_title("module title", &title)?;
        Self::validate_lessons(&lessons)?;

        Ok(Self {
            id,
            title,
            lessons,
            order,
        })
    }

    fn validate_lessons(lessons: &[Lesson]) -> AppResult<()> {
        if lessons.is_empty() {
            return Err(AppError::ValidationError(
                "a module must have at least one lesson".to_string(),
            ));
        }
        ensure_distinct("lesson id", lessons.iter().map(Lesson::id))?;
        ensure_distinct("lesson order", lessons.iter().map(Lesson::order))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id() == lesson_id)
    }

    pub fn add_lesson(&mut self, lesson: Lesson) -> AppResult<()> {
        let mut lessons = self.lessons.clone();
        lessons.push(lesson);
        Self::validate_lessons(&lessons)?;
        self.lessons = lessons;
        Ok(())
    }

    pub fn remove_lesson(&mut self, lesson_id: &str) -> AppResult<Lesson> {
        let Some(index) = self.lessons.iter().position(|l| l.id() == lesson_id) else {
            return Err(AppError::NotFound(format!(
                "lesson with id '{}' not found",
                lesson_id
            )));
        };
        if self.lessons.len() == 1 {
            return Err(AppError::ValidationError(
                "a module must have at least one lesson".to_string(),
            ));
        }
        Ok(self.lessons.remove(index))
    }

    /// Put lessons in the given order and renumber them 1..=n.
    pub fn reorder_lessons(&mut self, ordered_lesson_ids: &[String]) -> AppResult<()> {
        self.lessons = reorder_by_ids(
            "lesson",
            &self.lessons,
            ordered_lesson_ids,
            |l| l.id(),
            |l, order| l.update_order(order),
        )?;
        Ok(())
    }

    pub fn update_title(&mut self, title: impl Into<String>) -> AppResult<()> {
        let title = title.into();
        Validator::validate_title("module title", &title)?;
        self.title = title;
        Ok(())
    }

    pub fn update_order(&mut self, order: i32) {
        self.order = order;
    }

    /// Estimated minutes across all lessons.
    pub fn calculate_duration(&self) -> u32 {
        self.lessons.iter().map(Lesson::calculate_duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, order: i32) -> Lesson {
        Lesson::new(id, format!("Lesson {}", id), "", "", "", vec![], order).unwrap()
    }

    fn module() -> Module {
        Module::new(
            "m1",
            "Basics",
            vec![lesson("l1", 1), lesson("l2", 2), lesson("l3", 3)],
            1,
        )
        .unwrap()
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn requires_at_least_one_lesson() {
        let err = Module::new("m1", "Basics", vec![], 1).unwrap_err();
        assert_eq!(
            err,
            AppError::ValidationError("a module must have at least one lesson".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_lesson_orders() {
        let err = Module::new("m1", "Basics", vec![lesson("l1", 1), lesson("l2", 1)], 1)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn reorder_renumbers_contiguously() {
        let mut m = module();
        m.reorder_lessons(&ids(&["l3", "l1", "l2"])).unwrap();
        let order: Vec<(&str, i32)> = m.lessons().iter().map(|l| (l.id(), l.order())).collect();
        assert_eq!(order, vec![("l3", 1), ("l1", 2), ("l2", 3)]);
    }

    #[test]
    fn failed_reorder_leaves_lessons_untouched() {
        let mut m = module();
        let before = m.clone();
        assert!(m.reorder_lessons(&ids(&["l1", "l2"])).is_err());
        assert!(m.reorder_lessons(&ids(&["l1", "l2", "l9"])).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn cannot_remove_last_lesson() {
        let mut m = Module::new("m1", "Basics", vec![lesson("l1", 1)], 1).unwrap();
        assert!(m.remove_lesson("l1").unwrap_err().is_validation());
        assert!(m.remove_lesson("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn duration_sums_lessons() {
        assert_eq!(module().calculate_duration(), 30);
    }
}
