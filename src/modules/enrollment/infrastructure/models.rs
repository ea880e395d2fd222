use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::schema::{enrollments, lesson_progress, module_progress};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EnrollmentModel {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub enrolled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: BigDecimal,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = enrollments)]
pub struct NewEnrollment<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub course_id: &'a str,
    pub enrolled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: BigDecimal,
    pub status: &'a str,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = enrollments, treat_none_as_null = true)]
pub struct EnrollmentChangeset<'a> {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub progress: BigDecimal,
    pub status: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = module_progress)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ModuleProgressModel {
    pub enrollment_id: String,
    pub module_id: String,
    pub progress: BigDecimal,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = module_progress)]
pub struct NewModuleProgress<'a> {
    pub enrollment_id: &'a str,
    pub module_id: &'a str,
    pub progress: BigDecimal,
    pub status: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = lesson_progress)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LessonProgressModel {
    pub enrollment_id: String,
    pub lesson_id: String,
    pub progress: BigDecimal,
    pub status: String,
    pub exercise_score: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = lesson_progress)]
pub struct NewLessonProgress<'a> {
    pub enrollment_id: &'a str,
    pub lesson_id: &'a str,
    pub progress: BigDecimal,
    pub status: &'a str,
    pub exercise_score: BigDecimal,
}
