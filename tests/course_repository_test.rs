/// Course repository tests against a real postgres database
///
/// Tests cover:
/// - Whole-aggregate round trip and ordering
/// - Full-replace updates
/// - Cascade delete
/// - Rollback on cancellation
/// - Rejection of rows holding unknown enum values
mod utils;

use coursehub::modules::course::domain::{
    Course, CourseLevel, CourseRepository, Domain, Exercise, Tag,
};
use coursehub::modules::course::infrastructure::CourseRepositoryImpl;
use coursehub::{AppError, OperationContext};
use utils::factories;

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| id(i).to_string()).collect()
}

#[tokio::test]
async fn create_then_get_returns_the_same_tree() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let course = factories::course("c1", "t1");
    repo.create(&ctx, &course).await.unwrap();

    let loaded = repo.get(&ctx, "c1").await.unwrap();
    assert_eq!(loaded, course);
    assert_eq!(ids(loaded.modules(), |m| m.id()), ["c1-m1", "c1-m2"]);
    assert_eq!(
        ids(loaded.modules()[0].lessons(), |l| l.id()),
        ["c1-l1", "c1-l2"]
    );
    assert_eq!(
        ids(loaded.modules()[0].lessons()[0].exercises(), |e| e.id()),
        ["c1-e1", "c1-e2"]
    );
    assert!(loaded.has_tag(Tag::Backend));
    assert_eq!(loaded.lesson_count(), 3);
}

#[tokio::test]
async fn single_branch_course_keeps_answers_and_hides_the_correct_one() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let exercise = Exercise::new(
        "e1",
        "What does `go` start?",
        vec!["a goroutine".to_string(), "a thread".to_string()],
        "a goroutine",
        1,
    )
    .unwrap();
    let lesson = factories::lesson("l1", 1, vec![exercise]);
    let course = Course::builder("c1", "t1", "Go", Domain::Programming, CourseLevel::Beginner)
        .rating(4.5)
        .tags([Tag::Backend, Tag::Api])
        .modules(vec![factories::module("m1", 1, vec![lesson])])
        .build()
        .unwrap();
    repo.create(&ctx, &course).await.unwrap();

    let loaded = repo.get(&ctx, "c1").await.unwrap();
    assert_eq!(loaded.title(), "Go");
    assert_eq!(loaded.teacher_id(), "t1");
    assert_eq!(loaded.rating(), 4.5);
    assert_eq!(loaded.tags().len(), 2);
    assert_eq!(loaded.modules().len(), 1);
    assert_eq!(loaded.lesson_count(), 1);

    let stored = &loaded.modules()[0].lessons()[0].exercises()[0];
    assert_eq!(stored.answers(), ["a goroutine", "a thread"]);
    assert!(stored.check_answer("a goroutine"));
    assert!(format!("{:?}", stored).contains("<redacted>"));
}

#[tokio::test]
async fn rating_round_trips_exactly_and_finer_ratings_never_reach_storage() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let build = |rating: f64| {
        Course::builder("c1", "t1", "Go", Domain::Programming, CourseLevel::Beginner)
            .rating(rating)
            .modules(vec![factories::module(
                "m1",
                1,
                vec![factories::lesson("l1", 1, Vec::new())],
            )])
            .build()
    };

    let err = build(4.567).unwrap_err();
    assert!(err.is_validation(), "{:?}", err);

    let course = build(4.57).unwrap();
    repo.create(&ctx, &course).await.unwrap();
    let loaded = repo.get(&ctx, "c1").await.unwrap();
    assert_eq!(loaded.rating(), 4.57);
    assert_eq!(loaded, course);

    let mut updated = loaded.clone();
    assert!(updated.update_rating(3.125).is_err());
    updated.update_rating(3.13).unwrap();
    repo.update(&ctx, &updated).await.unwrap();
    assert_eq!(repo.get(&ctx, "c1").await.unwrap().rating(), 3.13);
}

#[tokio::test]
async fn children_come_back_ordered_by_position_not_insert_order() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let m_late = factories::module("late", 2, vec![factories::lesson("l-late", 1, Vec::new())]);
    let m_early = factories::module(
        "early",
        1,
        vec![
            factories::lesson("l-b", 2, Vec::new()),
            factories::lesson("l-a", 1, Vec::new()),
        ],
    );
    let course = Course::builder("c2", "t1", "ordering", Domain::Design, CourseLevel::Advanced)
        .modules(vec![m_late, m_early])
        .build()
        .unwrap();
    repo.create(&ctx, &course).await.unwrap();

    let loaded = repo.get(&ctx, "c2").await.unwrap();
    assert_eq!(ids(loaded.modules(), |m| m.id()), ["early", "late"]);
    assert_eq!(ids(loaded.modules()[0].lessons(), |l| l.id()), ["l-a", "l-b"]);
}

#[tokio::test]
async fn create_with_existing_id_fails_and_keeps_original() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let course = factories::course("c1", "t1");
    repo.create(&ctx, &course).await.unwrap();
    let err = repo.create(&ctx, &course).await.unwrap_err();

    assert!(matches!(err, AppError::DatabaseError(_)));
    assert_eq!(repo.get(&ctx, "c1").await.unwrap(), course);
}

#[tokio::test]
async fn update_replaces_the_subtree() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    repo.create(&ctx, &factories::course("c1", "t1")).await.unwrap();

    let lesson = factories::lesson("fresh-l1", 1, vec![factories::exercise("fresh-e1", 1)]);
    let replacement =
        Course::builder("c1", "t1", "rewritten", Domain::Business, CourseLevel::Intermediate)
            .tags([Tag::Free])
            .rating(3.25)
            .modules(vec![factories::module("fresh", 1, vec![lesson])])
            .build()
            .unwrap();
    repo.update(&ctx, &replacement).await.unwrap();

    let loaded = repo.get(&ctx, "c1").await.unwrap();
    assert_eq!(loaded, replacement);
    assert!(!loaded.has_tag(Tag::Backend));
    assert_eq!(loaded.lesson_count(), 1);
}

#[tokio::test]
async fn update_is_idempotent() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let course = factories::course("c1", "t1");
    repo.create(&ctx, &course).await.unwrap();
    repo.update(&ctx, &course).await.unwrap();
    repo.update(&ctx, &course).await.unwrap();

    assert_eq!(repo.get(&ctx, "c1").await.unwrap(), course);
}

#[tokio::test]
async fn update_of_missing_course_is_not_found() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());

    let err = repo
        .update(&OperationContext::background(), &factories::course("ghost", "t1"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_cascades_and_second_delete_is_not_found() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    repo.create(&ctx, &factories::course("c1", "t1")).await.unwrap();
    repo.delete(&ctx, "c1").await.unwrap();

    assert!(!repo.exists(&ctx, "c1").await.unwrap());
    assert!(repo.get(&ctx, "c1").await.unwrap_err().is_not_found());
    assert!(repo.delete(&ctx, "c1").await.unwrap_err().is_not_found());

    // the subtree ids are free again
    repo.create(&ctx, &factories::course("c1", "t1")).await.unwrap();
}

#[tokio::test]
async fn cancelled_context_writes_nothing() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();
    let cancelled = OperationContext::background();
    cancelled.cancel();

    let err = repo
        .create(&cancelled, &factories::course("c1", "t1"))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(!repo.exists(&ctx, "c1").await.unwrap());
}

#[tokio::test]
async fn listing_filters_by_teacher() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    repo.create(&ctx, &factories::course("a", "t1")).await.unwrap();
    repo.create(&ctx, &factories::course("b", "t2")).await.unwrap();
    repo.create(&ctx, &factories::course("c", "t1")).await.unwrap();

    assert_eq!(repo.get_all(&ctx).await.unwrap().len(), 3);
    let mine = repo.get_all_by_teacher_id(&ctx, "t1").await.unwrap();
    let mut mine = ids(&mine, |c| c.id());
    mine.sort();
    assert_eq!(mine, ["a", "c"]);
    assert!(repo.get_all_by_teacher_id(&ctx, "nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_stored_tag_is_a_data_integrity_error() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    repo.create(&ctx, &factories::course("c1", "t1")).await.unwrap();
    db.execute("INSERT INTO course_tags (course_id, tag) VALUES ('c1', 'astrology')");

    let err = repo.get(&ctx, "c1").await.unwrap_err();
    assert!(matches!(err, AppError::DataIntegrityError(_)), "{:?}", err);
}

#[tokio::test]
async fn unknown_stored_level_is_a_data_integrity_error() {
    let db = test_db_or_skip!();
    let repo = CourseRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    repo.create(&ctx, &factories::course("c1", "t1")).await.unwrap();
    db.execute("UPDATE courses SET level = 'expert' WHERE id = 'c1'");

    let err = repo.get_all(&ctx).await.unwrap_err();
    assert!(matches!(err, AppError::DataIntegrityError(_)), "{:?}", err);
}
