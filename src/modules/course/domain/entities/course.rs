use std::collections::BTreeSet;

use crate::modules::course::domain::value_objects::{CourseLevel, Domain, Tag};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

use super::lesson::Lesson;
use super::module::Module;
use super::ordering::{ensure_distinct, reorder_by_ids};

/// Aggregate root: a course and its full module → lesson → exercise tree.
///
/// Nested collections are only reachable as shared slices; every change
/// goes through a method that re-checks the tree invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: String,
    teacher_id: String,
    title: String,
    description: String,
    thumbnail: String,
    duration: u32,
    domain: Domain,
    tags: BTreeSet<Tag>,
    rating: f64,
    level: CourseLevel,
    modules: Vec<Module>,
}

/// Step-by-step construction of a `Course`; `build` validates everything.
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    id: String,
    teacher_id: String,
    title: String,
    description: String,
    thumbnail: String,
    duration: u32,
    domain: Domain,
    tags: BTreeSet<Tag>,
    rating: f64,
    level: CourseLevel,
    modules: Vec<Module>,
}

impl CourseBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Total running time in seconds.
    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn modules(mut self, modules: Vec<Module>) -> Self {
        self.modules = modules;
        self
    }

    pub fn build(self) -> AppResult<Course> {
        Validator::validate_required("course id", &self.id)?;
        Validator::validate_required("teacher id", &self.teacher_id)?;
        Validator::validate_title("course title", &self.title)?;
        Validator::validate_rating(self.rating)?;
        Course::validate_modules(&self.modules)?;

        Ok(Course {
            id: self.id,
            teacher_id: self.teacher_id,
            title: self.title,
            description: self.description,
            thumbnail: self.thumbnail,
            duration: self.duration,
            domain: self.domain,
            tags: self.tags,
            rating: self.rating,
            level: self.level,
            modules: self.modules,
        })
    }
}

impl Course {
    pub fn builder(
        id: impl Into<String>,
        teacher_id: impl Into<String>,
        title: impl Into<String>,
        domain: Domain,
        level: CourseLevel,
    ) -> CourseBuilder {
        CourseBuilder {
            id: id.into(),
            teacher_id: teacher_id.into(),
            title: title.into(),
            description: String::new(),
            thumbnail: String::new(),
            duration: 0,
            domain,
            tags: BTreeSet::new(),
            rating: 0.0,
            level,
            modules: Vec::new(),
        }
    }

    fn validate_modules(modules: &[Module]) -> AppResult<()> {
        if modules.is_empty() {
            return Err(AppError::ValidationError(
                "a course must have at least one module".to_string(),
            ));
        }
        ensure_distinct("module id", modules.iter().map(Module::id))?;
        ensure_distinct("module order", modules.iter().map(Module::order))?;
        // lesson and exercise ids are keys of their own tables
        ensure_distinct(
            "lesson id",
            modules.iter().flat_map(|m| m.lessons()).map(Lesson::id),
        )?;
        ensure_distinct(
            "exercise id",
            modules
                .iter()
                .flat_map(|m| m.lessons())
                .flat_map(|l| l.exercises())
                .map(|e| e.id()),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn teacher_id(&self) -> &str {
        &self.teacher_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    /// Seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn level(&self) -> CourseLevel {
        self.level
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == module_id)
    }

    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.modules.iter().find_map(|m| m.lesson(lesson_id))
    }

    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons().len()).sum()
    }

    pub fn is_owned_by(&self, teacher_id: &str) -> bool {
        self.teacher_id == teacher_id
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn add_tag(&mut self, tag: Tag) -> AppResult<()> {
        if !self.tags.insert(tag) {
            return Err(AppError::AlreadyExists("tag already exists".to_string()));
        }
        Ok(())
    }

    pub fn remove_tag(&mut self, tag: Tag) -> AppResult<()> {
        if !self.tags.remove(&tag) {
            return Err(AppError::NotFound("tag not found".to_string()));
        }
        Ok(())
    }

    pub fn update_basic_info(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> AppResult<()> {
        let title = title.into();
        Validator::validate_title("course title", &title)?;
        self.title = title;
        self.description = description.into();
        self.thumbnail = thumbnail.into();
        Ok(())
    }

    pub fn update_duration(&mut self, seconds: u32) {
        self.duration = seconds;
    }

    pub fn update_rating(&mut self, rating: f64) -> AppResult<()> {
        Validator::validate_rating(rating)?;
        self.rating = rating;
        Ok(())
    }

    pub fn add_module(&mut self, module: Module) -> AppResult<()> {
        let mut modules = self.modules.clone();
        modules.push(module);
        Self::validate_modules(&modules)?;
        self.modules = modules;
        Ok(())
    }

    pub fn remove_module(&mut self, module_id: &str) -> AppResult<Module> {
        let Some(index) = self.modules.iter().position(|m| m.id() == module_id) else {
            return Err(AppError::NotFound(format!(
                "module with id '{}' not found",
                module_id
            )));
        };
        if self.modules.len() == 1 {
            return Err(AppError::ValidationError(
                "a course must have at least one module".to_string(),
            ));
        }
        Ok(self.modules.remove(index))
    }

    /// Put modules in the given order and renumber them 1..=n.
    pub fn reorder_modules(&mut self, ordered_module_ids: &[String]) -> AppResult<()> {
        self.modules = reorder_by_ids(
            "module",
            &self.modules,
            ordered_module_ids,
            |m| m.id(),
            |m, order| m.update_order(order),
        )?;
        Ok(())
    }

    pub fn reorder_lessons(
        &mut self,
        module_id: &str,
        ordered_lesson_ids: &[String],
    ) -> AppResult<()> {
        let Some(module) = self.modules.iter_mut().find(|m| m.id() == module_id) else {
            return Err(AppError::NotFound(format!(
                "module with id '{}' not found",
                module_id
            )));
        };
        module.reorder_lessons(ordered_lesson_ids)
    }

    /// Estimated minutes across the whole tree.
    pub fn calculate_duration(&self) -> u32 {
        self.modules.iter().map(Module::calculate_duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::course::domain::entities::Exercise;

    fn exercise() -> Exercise {
        Exercise::new(
            "e1",
            "What does `?` do?",
            vec!["propagates errors".into(), "panics".into()],
            "propagates errors",
            1,
        )
        .unwrap()
    }

    fn module(id: &str, lesson_id: &str, order: i32) -> Module {
        let lesson = Lesson::new(lesson_id, "Intro", "", "", "", vec![], 1).unwrap();
        Module::new(id, "Module", vec![lesson], order).unwrap()
    }

    fn course() -> Course {
        let lesson = Lesson::new("l1", "Intro", "overview", "content", "", vec![exercise()], 1)
            .unwrap();
        let module = Module::new("m1", "Basics", vec![lesson], 1).unwrap();
        Course::builder("c1", "t1", "Go", Domain::Programming, CourseLevel::Beginner)
            .rating(4.5)
            .tags([Tag::Backend, Tag::Api])
            .modules(vec![module])
            .build()
            .unwrap()
    }

    #[test]
    fn builds_course_with_tree() {
        let c = course();
        assert_eq!(c.id(), "c1");
        assert_eq!(c.teacher_id(), "t1");
        assert_eq!(c.title(), "Go");
        assert_eq!(c.rating(), 4.5);
        assert_eq!(c.tags().len(), 2);
        assert_eq!(c.modules().len(), 1);
        assert_eq!(c.lesson_count(), 1);
        assert!(c.is_owned_by("t1"));
        assert!(c.find_lesson("l1").is_some());
    }

    #[test]
    fn title_and_teacher_are_required() {
        let base = || {
            Course::builder("c1", "t1", "Go", Domain::Programming, CourseLevel::Beginner)
                .modules(vec![module("m1", "l1", 1)])
        };
        assert!(base().build().is_ok());

        let err = Course::builder("c1", "", "Go", Domain::Programming, CourseLevel::Beginner)
            .modules(vec![module("m1", "l1", 1)])
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: teacher id is required");

        let err = Course::builder("c1", "t1", "", Domain::Programming, CourseLevel::Beginner)
            .modules(vec![module("m1", "l1", 1)])
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation error: course title is required");
    }

    #[test]
    fn rating_must_be_in_range() {
        let cases = [
            (0.0, true),
            (5.0, true),
            (4.57, true),
            (-0.5, false),
            (5.5, false),
            (4.567, false),
        ];
        for (rating, ok) in cases {
            let result = Course::builder("c1", "t1", "Go", Domain::Design, CourseLevel::Advanced)
                .rating(rating)
                .modules(vec![module("m1", "l1", 1)])
                .build();
            assert_eq!(result.is_ok(), ok, "rating {}", rating);
        }
    }

    #[test]
    fn needs_a_module() {
        let err = Course::builder("c1", "t1", "Go", Domain::Design, CourseLevel::Advanced)
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_duplicate_module_orders_and_lesson_ids() {
        let dup_order = Course::builder("c1", "t1", "Go", Domain::Design, CourseLevel::Advanced)
            .modules(vec![module("m1", "l1", 1), module("m2", "l2", 1)])
            .build();
        assert!(dup_order.is_err());

        let dup_lesson = Course::builder("c1", "t1", "Go", Domain::Design, CourseLevel::Advanced)
            .modules(vec![module("m1", "l1", 1), module("m2", "l1", 2)])
            .build();
        assert!(dup_lesson.is_err());
    }

    #[test]
    fn duplicate_tag_is_rejected_and_set_unchanged() {
        let mut c = course();
        let err = c.add_tag(Tag::Backend).unwrap_err();
        assert_eq!(err, AppError::AlreadyExists("tag already exists".to_string()));
        assert_eq!(c.tags().len(), 2);

        c.add_tag(Tag::Cloud).unwrap();
        assert!(c.has_tag(Tag::Cloud));
        assert_eq!(c.tags().len(), 3);
    }

    #[test]
    fn removing_missing_tag_is_not_found() {
        let mut c = course();
        c.remove_tag(Tag::Api).unwrap();
        assert!(c.remove_tag(Tag::Api).unwrap_err().is_not_found());
    }

    #[test]
    fn update_rating_validates() {
        let mut c = course();
        assert!(c.update_rating(6.0).is_err());
        assert!(c.update_rating(3.333).is_err());
        assert_eq!(c.rating(), 4.5);
        c.update_rating(3.0).unwrap();
        assert_eq!(c.rating(), 3.0);
    }

    #[test]
    fn module_reorder_and_removal() {
        let mut c = course();
        c.add_module(module("m2", "l2", 2)).unwrap();
        assert!(c.add_module(module("m3", "l2", 3)).is_err());

        c.reorder_modules(&["m2".to_string(), "m1".to_string()]).unwrap();
        let order: Vec<(&str, i32)> = c.modules().iter().map(|m| (m.id(), m.order())).collect();
        assert_eq!(order, vec![("m2", 1), ("m1", 2)]);

        c.remove_module("m2").unwrap();
        assert!(c.remove_module("m1").unwrap_err().is_validation());
    }

    #[test]
    fn reorder_lessons_in_unknown_module_is_not_found() {
        let mut c = course();
        let err = c.reorder_lessons("m9", &["l1".to_string()]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn duration_estimate_walks_the_tree() {
        // one lesson with one exercise: 10 + 2
        assert_eq!(course().calculate_duration(), 12);
    }
}
