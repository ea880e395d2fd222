/// Row ↔ aggregate mapping for the course tree
///
/// Blocking helpers shared by the course, module and lesson repositories.
/// They run inside `spawn_blocking` on a borrowed connection; writes are
/// expected to be wrapped in a transaction by the caller.
use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use super::models::*;
use crate::log_debug;
use crate::modules::course::domain::entities::{Course, Exercise, Lesson, Module};
use crate::modules::course::domain::value_objects::{CourseLevel, Domain, Tag};
use crate::schema::{course_tags, courses, exercises, lessons, modules};
use crate::shared::context::OperationContext;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::decimal::{from_decimal, to_decimal};

// -------------------------------------------------------------------------
// Write side
// -------------------------------------------------------------------------

fn stored_duration(course: &Course) -> AppResult<i32> {
    i32::try_from(course.duration()).map_err(|_| {
        AppError::ValidationError(format!(
            "duration {} does not fit the storage column",
            course.duration()
        ))
    })
}

pub fn course_to_new_model(course: &Course) -> AppResult<NewCourse<'_>> {
    Ok(NewCourse {
        id: course.id(),
        teacher_id: course.teacher_id(),
        title: course.title(),
        description: non_empty(course.description()),
        thumbnail: non_empty(course.thumbnail()),
        duration: stored_duration(course)?,
        domain: course.domain().as_str(),
        rating: to_decimal("rating", course.rating())?,
        level: course.level().as_str(),
    })
}

pub fn course_to_changeset(course: &Course) -> AppResult<CourseChangeset<'_>> {
    Ok(CourseChangeset {
        teacher_id: course.teacher_id(),
        title: course.title(),
        description: non_empty(course.description()),
        thumbnail: non_empty(course.thumbnail()),
        duration: stored_duration(course)?,
        domain: course.domain().as_str(),
        rating: to_decimal("rating", course.rating())?,
        level: course.level().as_str(),
        updated_at: Utc::now(),
    })
}

pub fn insert_tags(
    conn: &mut PgConnection,
    course_id: &str,
    tags: &BTreeSet<Tag>,
) -> AppResult<()> {
    if tags.is_empty() {
        return Ok(());
    }
    let rows: Vec<NewCourseTag> = tags
        .iter()
        .map(|tag| NewCourseTag {
            course_id,
            tag: tag.as_str(),
        })
        .collect();

    diesel::insert_into(course_tags::table)
        .values(&rows)
        .execute(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to insert tags for course '{}': {}",
                course_id, e
            ))
        })?;
    Ok(())
}

/// Insert modules in aggregate order, each followed by its lessons and
/// their exercises.
pub fn insert_modules(
    conn: &mut PgConnection,
    ctx: &OperationContext,
    course_id: &str,
    course_modules: &[Module],
) -> AppResult<()> {
    for module in course_modules {
        ctx.check()?;

        diesel::insert_into(modules::table)
            .values(&NewModule {
                id: module.id(),
                course_id,
                title: module.title(),
                order_index: module.order(),
            })
            .execute(conn)
            .map_err(|e| {
                AppError::DatabaseError(format!(
                    "Failed to insert module '{}': {}",
                    module.id(),
                    e
                ))
            })?;

        insert_lessons(conn, module.id(), module.lessons())?;
    }
    Ok(())
}

fn insert_lessons(
    conn: &mut PgConnection,
    module_id: &str,
    module_lessons: &[Lesson],
) -> AppResult<()> {
    for lesson in module_lessons {
        diesel::insert_into(lessons::table)
            .values(&NewLesson {
                id: lesson.id(),
                module_id,
                title: lesson.title(),
                overview: non_empty(lesson.overview()),
                content: non_empty(lesson.content()),
                video_id: non_empty(lesson.video_id()),
                order_index: lesson.order(),
            })
            .execute(conn)
            .map_err(|e| {
                AppError::DatabaseError(format!(
                    "Failed to insert lesson '{}': {}",
                    lesson.id(),
                    e
                ))
            })?;

        insert_exercises(conn, lesson.id(), lesson.exercises())?;
    }
    Ok(())
}

fn insert_exercises(
    conn: &mut PgConnection,
    lesson_id: &str,
    lesson_exercises: &[Exercise],
) -> AppResult<()> {
    if lesson_exercises.is_empty() {
        return Ok(());
    }
    let rows: Vec<NewExercise> = lesson_exercises
        .iter()
        .map(|exercise| NewExercise {
            id: exercise.id(),
            lesson_id,
            question: exercise.question(),
            answers: exercise.answers().to_vec(),
            correct_answer: exercise.correct_answer_for_storage(),
            order_index: exercise.order(),
        })
        .collect();

    diesel::insert_into(exercises::table)
        .values(&rows)
        .execute(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to insert exercises for lesson '{}': {}",
                lesson_id, e
            ))
        })?;
    Ok(())
}

/// Check that `orders` assigns positions 1..=n to exactly the children in
/// `existing_ids`.
pub fn validate_reorder(
    label: &str,
    parent_id: &str,
    existing_ids: &[String],
    orders: &HashMap<String, i32>,
) -> AppResult<()> {
    if orders.len() != existing_ids.len() {
        return Err(AppError::ValidationError(format!(
            "{} count mismatch for '{}': {} stored, {} supplied",
            label,
            parent_id,
            existing_ids.len(),
            orders.len()
        )));
    }
    if let Some(missing) = existing_ids.iter().find(|id| !orders.contains_key(*id)) {
        return Err(AppError::ValidationError(format!(
            "no order supplied for {} '{}'",
            label, missing
        )));
    }

    let n = existing_ids.len() as i32;
    let positions: HashSet<i32> = orders.values().copied().collect();
    if positions.len() != orders.len() || positions.iter().any(|p| *p < 1 || *p > n) {
        return Err(AppError::ValidationError(format!(
            "{} orders for '{}' must be distinct and cover 1..={}",
            label, parent_id, n
        )));
    }
    Ok(())
}

// -------------------------------------------------------------------------
// Read side
// -------------------------------------------------------------------------

fn parse_stored<T, E>(raw: &str, owner: &str) -> AppResult<T>
where
    T: std::str::FromStr<Err = E>,
    E: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| AppError::DataIntegrityError(format!("{}: {}", owner, e)))
}

pub fn load_tags(conn: &mut PgConnection, course_id: &str) -> AppResult<BTreeSet<Tag>> {
    let raw: Vec<String> = course_tags::table
        .filter(course_tags::course_id.eq(course_id))
        .select(course_tags::tag)
        .load(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to load tags for course '{}': {}",
                course_id, e
            ))
        })?;

    raw.iter()
        .map(|tag| parse_stored::<Tag, _>(tag, &format!("course '{}'", course_id)))
        .collect()
}

pub fn load_exercises(conn: &mut PgConnection, lesson_id: &str) -> AppResult<Vec<Exercise>> {
    let rows: Vec<ExerciseModel> = exercises::table
        .filter(exercises::lesson_id.eq(lesson_id))
        .order((exercises::order_index.asc(), exercises::id.asc()))
        .select(ExerciseModel::as_select())
        .load(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to load exercises for lesson '{}': {}",
                lesson_id, e
            ))
        })?;

    rows.into_iter()
        .map(|row| {
            let id = row.id.clone();
            Exercise::new(
                row.id,
                row.question,
                row.answers,
                row.correct_answer,
                row.order_index,
            )
            .map_err(|e| e.into_integrity().context(format!("rebuild exercise '{}'", id)))
        })
        .collect()
}

pub fn lesson_from_model(conn: &mut PgConnection, row: LessonModel) -> AppResult<Lesson> {
    let exercises = load_exercises(conn, &row.id)?;
    let id = row.id.clone();
    Lesson::new(
        row.id,
        row.title,
        row.overview.unwrap_or_default(),
        row.content.unwrap_or_default(),
        row.video_id.unwrap_or_default(),
        exercises,
        row.order_index,
    )
    .map_err(|e| e.into_integrity().context(format!("rebuild lesson '{}'", id)))
}

pub fn load_lessons(
    conn: &mut PgConnection,
    ctx: &OperationContext,
    module_id: &str,
) -> AppResult<Vec<Lesson>> {
    let rows: Vec<LessonModel> = lessons::table
        .filter(lessons::module_id.eq(module_id))
        .order((lessons::order_index.asc(), lessons::id.asc()))
        .select(LessonModel::as_select())
        .load(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to load lessons for module '{}': {}",
                module_id, e
            ))
        })?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        ctx.check()?;
        out.push(lesson_from_model(conn, row)?);
    }
    Ok(out)
}

pub fn module_from_model(
    conn: &mut PgConnection,
    ctx: &OperationContext,
    row: ModuleModel,
) -> AppResult<Module> {
    let lessons = load_lessons(conn, ctx, &row.id)?;
    let id = row.id.clone();
    Module::new(row.id, row.title, lessons, row.order_index)
        .map_err(|e| e.into_integrity().context(format!("rebuild module '{}'", id)))
}

pub fn load_modules(
    conn: &mut PgConnection,
    ctx: &OperationContext,
    course_id: &str,
) -> AppResult<Vec<Module>> {
    let rows: Vec<ModuleModel> = modules::table
        .filter(modules::course_id.eq(course_id))
        .order((modules::order_index.asc(), modules::id.asc()))
        .select(ModuleModel::as_select())
        .load(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to load modules for course '{}': {}",
                course_id, e
            ))
        })?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(module_from_model(conn, ctx, row)?);
    }
    Ok(out)
}

/// Rebuild a full course from its row: tags, then modules → lessons →
/// exercises, each level through its validating constructor.
pub fn course_from_model(
    conn: &mut PgConnection,
    ctx: &OperationContext,
    row: CourseModel,
) -> AppResult<Course> {
    ctx.check()?;
    let owner = format!("course '{}'", row.id);

    let tags = load_tags(conn, &row.id)?;
    let modules = load_modules(conn, ctx, &row.id)?;

    let domain = parse_stored::<Domain, _>(&row.domain, &owner)?;
    let level = parse_stored::<CourseLevel, _>(&row.level, &owner)?;
    let rating = from_decimal("rating", &row.rating).map_err(|e| e.context(&owner))?;
    let duration = u32::try_from(row.duration).map_err(|_| {
        AppError::DataIntegrityError(format!("{}: negative duration {}", owner, row.duration))
    })?;

    log_debug!(
        "Rebuilt {} with {} modules and {} tags",
        owner,
        modules.len(),
        tags.len()
    );

    Course::builder(row.id, row.teacher_id, row.title, domain, level)
        .description(row.description.unwrap_or_default())
        .thumbnail(row.thumbnail.unwrap_or_default())
        .duration(duration)
        .tags(tags)
        .rating(rating)
        .modules(modules)
        .build()
        .map_err(|e| e.into_integrity().context(format!("rebuild {}", owner)))
}

pub fn find_course_row(conn: &mut PgConnection, id: &str) -> AppResult<Option<CourseModel>> {
    courses::table
        .find(id)
        .select(CourseModel::as_select())
        .first(conn)
        .optional()
        .map_err(|e| AppError::DatabaseError(format!("Failed to load course '{}': {}", id, e)))
}
