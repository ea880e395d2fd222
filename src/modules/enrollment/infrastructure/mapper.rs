/// Row ↔ aggregate mapping for enrollments and their progress records
use bigdecimal::BigDecimal;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use super::models::*;
use crate::modules::enrollment::domain::entities::{
    CourseProgress, Enrollment, EnrollmentTimestamps, LessonProgress, ModuleProgress,
};
use crate::modules::enrollment::domain::value_objects::{Progress, Status};
use crate::schema::{enrollments, lesson_progress, module_progress};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::decimal::{from_decimal, to_decimal};

// -------------------------------------------------------------------------
// Write side
// -------------------------------------------------------------------------

pub fn enrollment_to_new_model(enrollment: &Enrollment) -> AppResult<NewEnrollment<'_>> {
    let progress = enrollment.course_progress().progress();
    Ok(NewEnrollment {
        id: enrollment.id(),
        user_id: enrollment.user_id(),
        course_id: enrollment.course_id(),
        enrolled_at: enrollment.enrolled_at(),
        started_at: enrollment.started_at(),
        completed_at: enrollment.completed_at(),
        progress: to_decimal("course progress", progress.percentage())?,
        status: progress.status().as_str(),
    })
}

pub fn enrollment_to_changeset(enrollment: &Enrollment) -> AppResult<EnrollmentChangeset<'_>> {
    let progress = enrollment.course_progress().progress();
    Ok(EnrollmentChangeset {
        started_at: enrollment.started_at(),
        completed_at: enrollment.completed_at(),
        progress: to_decimal("course progress", progress.percentage())?,
        status: progress.status().as_str(),
    })
}

/// Insert the enrollment row. A second enrollment of the same user in the
/// same course is reported as `AlreadyExists`.
pub fn insert_enrollment(conn: &mut PgConnection, enrollment: &Enrollment) -> AppResult<()> {
    let row = enrollment_to_new_model(enrollment)?;
    diesel::insert_into(enrollments::table)
        .values(&row)
        .execute(conn)
        .map_err(|e| match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                AppError::AlreadyExists(format!(
                    "user '{}' is already enrolled in course '{}'",
                    enrollment.user_id(),
                    enrollment.course_id()
                ))
            }
            other => AppError::DatabaseError(format!(
                "Failed to insert enrollment '{}': {}",
                enrollment.id(),
                other
            )),
        })?;
    Ok(())
}

pub fn insert_progress(conn: &mut PgConnection, enrollment: &Enrollment) -> AppResult<()> {
    let modules = enrollment
        .module_progress()
        .iter()
        .map(|mp| {
            Ok(NewModuleProgress {
                enrollment_id: enrollment.id(),
                module_id: mp.module_id(),
                progress: to_decimal("module progress", mp.progress().percentage())?,
                status: mp.progress().status().as_str(),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;
    if !modules.is_empty() {
        diesel::insert_into(module_progress::table)
            .values(&modules)
            .execute(conn)
            .map_err(|e| {
                AppError::DatabaseError(format!(
                    "Failed to insert module progress for enrollment '{}': {}",
                    enrollment.id(),
                    e
                ))
            })?;
    }

    let lessons = enrollment
        .lesson_progress()
        .iter()
        .map(|lp| {
            Ok(NewLessonProgress {
                enrollment_id: enrollment.id(),
                lesson_id: lp.lesson_id(),
                progress: to_decimal("lesson progress", lp.progress().percentage())?,
                status: lp.progress().status().as_str(),
                exercise_score: to_decimal("exercise score", lp.exercise_score())?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;
    if !lessons.is_empty() {
        diesel::insert_into(lesson_progress::table)
            .values(&lessons)
            .execute(conn)
            .map_err(|e| {
                AppError::DatabaseError(format!(
                    "Failed to insert lesson progress for enrollment '{}': {}",
                    enrollment.id(),
                    e
                ))
            })?;
    }
    Ok(())
}

pub fn delete_progress(conn: &mut PgConnection, enrollment_id: &str) -> AppResult<()> {
    diesel::delete(module_progress::table.filter(module_progress::enrollment_id.eq(enrollment_id)))
        .execute(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to delete module progress for enrollment '{}': {}",
                enrollment_id, e
            ))
        })?;
    diesel::delete(lesson_progress::table.filter(lesson_progress::enrollment_id.eq(enrollment_id)))
        .execute(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to delete lesson progress for enrollment '{}': {}",
                enrollment_id, e
            ))
        })?;
    Ok(())
}

// -------------------------------------------------------------------------
// Read side
// -------------------------------------------------------------------------

fn stored_progress(
    owner: &str,
    field: &str,
    percentage: &BigDecimal,
    status: &str,
) -> AppResult<Progress> {
    let status = status
        .parse::<Status>()
        .map_err(|e| AppError::DataIntegrityError(format!("{}: {}", owner, e)))?;
    let percentage = from_decimal(field, percentage)?;
    Progress::new(percentage, status).map_err(|e| e.into_integrity().context(owner))
}

pub fn enrollment_from_models(
    row: EnrollmentModel,
    modules: Vec<ModuleProgressModel>,
    lessons: Vec<LessonProgressModel>,
) -> AppResult<Enrollment> {
    let owner = format!("enrollment '{}'", row.id);
    let course_progress = CourseProgress::new(stored_progress(
        &owner,
        "course progress",
        &row.progress,
        &row.status,
    )?);

    let module_progress = modules
        .into_iter()
        .map(|m| {
            let progress = stored_progress(&owner, "module progress", &m.progress, &m.status)?;
            ModuleProgress::new(m.module_id, progress)
                .map_err(|e| e.into_integrity().context(&owner))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let lesson_progress = lessons
        .into_iter()
        .map(|l| {
            let progress = stored_progress(&owner, "lesson progress", &l.progress, &l.status)?;
            let score = from_decimal("exercise score", &l.exercise_score)?;
            LessonProgress::new(l.lesson_id, progress, score)
                .map_err(|e| e.into_integrity().context(&owner))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Enrollment::restore(
        row.id,
        row.user_id,
        row.course_id,
        EnrollmentTimestamps {
            enrolled_at: row.enrolled_at,
            started_at: row.started_at,
            completed_at: row.completed_at,
        },
        course_progress,
        module_progress,
        lesson_progress,
    )
    .map_err(|e| e.into_integrity().context(format!("rebuild {}", owner)))
}

/// Load progress records for `row` and rebuild the aggregate.
pub fn load_enrollment(conn: &mut PgConnection, row: EnrollmentModel) -> AppResult<Enrollment> {
    let modules = module_progress::table
        .filter(module_progress::enrollment_id.eq(&row.id))
        .order(module_progress::module_id.asc())
        .select(ModuleProgressModel::as_select())
        .load(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to load module progress for enrollment '{}': {}",
                row.id, e
            ))
        })?;
    let lessons = lesson_progress::table
        .filter(lesson_progress::enrollment_id.eq(&row.id))
        .order(lesson_progress::lesson_id.asc())
        .select(LessonProgressModel::as_select())
        .load(conn)
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to load lesson progress for enrollment '{}': {}",
                row.id, e
            ))
        })?;

    enrollment_from_models(row, modules, lessons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn row(status: &str) -> EnrollmentModel {
        EnrollmentModel {
            id: "en1".to_string(),
            user_id: "s1".to_string(),
            course_id: "c1".to_string(),
            enrolled_at: Utc::now(),
            started_at: Some(Utc::now()),
            completed_at: None,
            progress: decimal("50.00"),
            status: status.to_string(),
        }
    }

    fn lesson(id: &str, status: &str, score: &str) -> LessonProgressModel {
        LessonProgressModel {
            enrollment_id: "en1".to_string(),
            lesson_id: id.to_string(),
            progress: decimal(if status == "completed" { "100.00" } else { "0.00" }),
            status: status.to_string(),
            exercise_score: decimal(score),
        }
    }

    #[test]
    fn restores_every_progress_record() {
        let modules = vec![ModuleProgressModel {
            enrollment_id: "en1".to_string(),
            module_id: "m1".to_string(),
            progress: decimal("50.00"),
            status: "in_progress".to_string(),
        }];
        let lessons = vec![
            lesson("l1", "completed", "90.00"),
            lesson("l2", "in_progress", "35.50"),
        ];

        let enrollment = enrollment_from_models(row("in_progress"), modules, lessons).unwrap();
        assert_eq!(enrollment.course_progress().progress().percentage(), 50.0);
        assert_eq!(enrollment.module_progress()[0].progress().status(), Status::InProgress);
        assert_eq!(
            enrollment.lesson_progress_for("l2").unwrap().exercise_score(),
            35.5
        );
        assert!(enrollment.lesson_progress_for("l1").unwrap().is_completed());
    }

    #[test]
    fn unknown_status_is_integrity_error() {
        let err = enrollment_from_models(row("paused"), Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(
            err,
            AppError::DataIntegrityError("enrollment 'en1': unknown 'paused' status".to_string())
        );
    }

    #[test]
    fn out_of_range_score_is_integrity_error() {
        let err = enrollment_from_models(
            row("in_progress"),
            Vec::new(),
            vec![lesson("l1", "in_progress", "150.00")],
        )
        .unwrap_err();
        assert!(matches!(err, AppError::DataIntegrityError(_)));
    }

    #[test]
    fn new_model_carries_course_progress() {
        let enrollment = Enrollment::new("en1", "s1", "c1").unwrap();
        let model = enrollment_to_new_model(&enrollment).unwrap();
        assert_eq!(model.status, "enrolled");
        assert_eq!(model.progress, decimal("0.00"));
        assert_eq!(model.started_at, None);
    }
}
