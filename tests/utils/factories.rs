/// Builders for aggregates used across repository tests
use coursehub::modules::course::domain::{
    Course, CourseLevel, Domain, Exercise, Lesson, Module, Tag,
};
use coursehub::modules::user::domain::{Role, User};

pub fn exercise(id: &str, order: i32) -> Exercise {
    Exercise::new(
        id,
        format!("question {}", id),
        vec!["yes".to_string(), "no".to_string()],
        "yes",
        order,
    )
    .unwrap()
}

pub fn lesson(id: &str, order: i32, exercises: Vec<Exercise>) -> Lesson {
    Lesson::new(
        id,
        format!("lesson {}", id),
        "overview",
        "content",
        "",
        exercises,
        order,
    )
    .unwrap()
}

pub fn module(id: &str, order: i32, lessons: Vec<Lesson>) -> Module {
    Module::new(id, format!("module {}", id), lessons, order).unwrap()
}

/// Course `id` with modules m1 (order 1) and m2 (order 2)
///
/// m1 holds lessons l1 (exercises e1, e2) and l2; m2 holds l3. Ids are
/// prefixed with the course id so several courses can live side by side.
pub fn course(id: &str, teacher_id: &str) -> Course {
    let p = |s: &str| format!("{}-{}", id, s);
    let m1 = module(
        &p("m1"),
        1,
        vec![
            lesson(
                &p("l1"),
                1,
                vec![exercise(&p("e1"), 1), exercise(&p("e2"), 2)],
            ),
            lesson(&p("l2"), 2, Vec::new()),
        ],
    );
    let m2 = module(&p("m2"), 2, vec![lesson(&p("l3"), 1, Vec::new())]);

    Course::builder(
        id,
        teacher_id,
        format!("course {}", id),
        Domain::Programming,
        CourseLevel::Beginner,
    )
    .description("learn things")
    .duration(3600)
    .tags([Tag::Backend, Tag::Api])
    .rating(4.5)
    .modules(vec![m1, m2])
    .build()
    .unwrap()
}

pub fn teacher(id: &str) -> User {
    User::new(
        id,
        format!("teacher-{}", id),
        format!("{}@example.com", id),
        Role::Teacher,
        "ten years of rust",
    )
    .unwrap()
}

pub fn student(id: &str) -> User {
    User::new(
        id,
        format!("student-{}", id),
        format!("{}@example.com", id),
        Role::Student,
        "",
    )
    .unwrap()
}
