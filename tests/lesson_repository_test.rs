/// Module and lesson repository tests: partial reads and reorders
mod utils;

use std::collections::HashMap;

use coursehub::modules::course::domain::{CourseRepository, LessonRepository, ModuleRepository};
use coursehub::modules::course::infrastructure::{
    CourseRepositoryImpl, LessonRepositoryImpl, ModuleRepositoryImpl,
};
use coursehub::OperationContext;
use utils::factories;

fn orders(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
    pairs.iter().map(|(id, o)| (id.to_string(), *o)).collect()
}

#[tokio::test]
async fn lessons_of_a_module_are_ordered() {
    let db = test_db_or_skip!();
    let ctx = OperationContext::background();
    CourseRepositoryImpl::new(db.database())
        .create(&ctx, &factories::course("c1", "t1"))
        .await
        .unwrap();
    let lessons = LessonRepositoryImpl::new(db.database());

    let loaded = lessons.get_by_module_id(&ctx, "c1-m1").await.unwrap();
    let ids: Vec<&str> = loaded.iter().map(|l| l.id()).collect();
    assert_eq!(ids, ["c1-l1", "c1-l2"]);
    assert_eq!(loaded[0].exercises().len(), 2);

    assert!(lessons.get_by_module_id(&ctx, "nope").await.unwrap().is_empty());
    assert!(lessons.get(&ctx, "nope").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn reorder_swaps_positions_in_one_transaction() {
    let db = test_db_or_skip!();
    let ctx = OperationContext::background();
    let courses = CourseRepositoryImpl::new(db.database());
    courses.create(&ctx, &factories::course("c1", "t1")).await.unwrap();
    let lessons = LessonRepositoryImpl::new(db.database());

    lessons
        .reorder_lessons(&ctx, "c1-m1", &orders(&[("c1-l1", 2), ("c1-l2", 1)]))
        .await
        .unwrap();

    let course = courses.get(&ctx, "c1").await.unwrap();
    let ids: Vec<&str> = course.modules()[0].lessons().iter().map(|l| l.id()).collect();
    assert_eq!(ids, ["c1-l2", "c1-l1"]);
}

#[tokio::test]
async fn partial_reorder_is_rejected_and_changes_nothing() {
    let db = test_db_or_skip!();
    let ctx = OperationContext::background();
    CourseRepositoryImpl::new(db.database())
        .create(&ctx, &factories::course("c1", "t1"))
        .await
        .unwrap();
    let lessons = LessonRepositoryImpl::new(db.database());

    let err = lessons
        .reorder_lessons(&ctx, "c1-m1", &orders(&[("c1-l1", 2)]))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = lessons
        .reorder_lessons(&ctx, "c1-m1", &orders(&[("c1-l1", 1), ("c1-l3", 2)]))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert_eq!(lessons.get(&ctx, "c1-l1").await.unwrap().order(), 1);
}

#[tokio::test]
async fn reorder_of_empty_module_is_not_found() {
    let db = test_db_or_skip!();
    let lessons = LessonRepositoryImpl::new(db.database());

    let err = lessons
        .reorder_lessons(
            &OperationContext::background(),
            "ghost",
            &orders(&[("x", 1)]),
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn modules_reorder_and_exist() {
    let db = test_db_or_skip!();
    let ctx = OperationContext::background();
    CourseRepositoryImpl::new(db.database())
        .create(&ctx, &factories::course("c1", "t1"))
        .await
        .unwrap();
    let modules = ModuleRepositoryImpl::new(db.database());

    assert!(modules.exists(&ctx, "c1-m2").await.unwrap());
    modules
        .reorder_modules(&ctx, "c1", &orders(&[("c1-m1", 2), ("c1-m2", 1)]))
        .await
        .unwrap();

    let loaded = modules.get_by_course_id(&ctx, "c1").await.unwrap();
    let ids: Vec<&str> = loaded.iter().map(|m| m.id()).collect();
    assert_eq!(ids, ["c1-m2", "c1-m1"]);
    assert_eq!(modules.get(&ctx, "c1-m1").await.unwrap().lessons().len(), 2);
}
