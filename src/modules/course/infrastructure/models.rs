use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::schema::{course_tags, courses, exercises, lessons, modules};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CourseModel {
    pub id: String,
    pub teacher_id: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: i32,
    pub domain: String,
    pub rating: BigDecimal,
    pub level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = courses)]
pub struct NewCourse<'a> {
    pub id: &'a str,
    pub teacher_id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub thumbnail: Option<&'a str>,
    pub duration: i32,
    pub domain: &'a str,
    pub rating: BigDecimal,
    pub level: &'a str,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = courses, treat_none_as_null = true)]
pub struct CourseChangeset<'a> {
    pub teacher_id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub thumbnail: Option<&'a str>,
    pub duration: i32,
    pub domain: &'a str,
    pub rating: BigDecimal,
    pub level: &'a str,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = course_tags)]
pub struct NewCourseTag<'a> {
    pub course_id: &'a str,
    pub tag: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = modules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ModuleModel {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub order_index: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = modules)]
pub struct NewModule<'a> {
    pub id: &'a str,
    pub course_id: &'a str,
    pub title: &'a str,
    pub order_index: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = lessons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LessonModel {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub overview: Option<String>,
    pub content: Option<String>,
    pub video_id: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = lessons)]
pub struct NewLesson<'a> {
    pub id: &'a str,
    pub module_id: &'a str,
    pub title: &'a str,
    pub overview: Option<&'a str>,
    pub content: Option<&'a str>,
    pub video_id: Option<&'a str>,
    pub order_index: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExerciseModel {
    pub id: String,
    pub lesson_id: String,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub order_index: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = exercises)]
pub struct NewExercise<'a> {
    pub id: &'a str,
    pub lesson_id: &'a str,
    pub question: &'a str,
    pub answers: Vec<String>,
    pub correct_answer: &'a str,
    pub order_index: i32,
}

/// Empty optional text is stored as NULL.
pub fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
