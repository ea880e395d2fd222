/// User repository tests
mod utils;

use coursehub::modules::user::domain::{Role, User, UserRepository};
use coursehub::modules::user::infrastructure::UserRepositoryImpl;
use coursehub::{AppError, OperationContext};
use utils::factories;

#[tokio::test]
async fn create_then_get_round_trips() {
    let db = test_db_or_skip!();
    let repo = UserRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let teacher = factories::teacher("u1");
    let student = factories::student("u2");
    repo.create(&ctx, &teacher).await.unwrap();
    repo.create(&ctx, &student).await.unwrap();

    assert_eq!(repo.get(&ctx, "u1").await.unwrap(), teacher);
    let loaded = repo.get(&ctx, "u2").await.unwrap();
    assert_eq!(loaded, student);
    assert_eq!(loaded.profile(), "");
    assert_eq!(repo.get_all(&ctx).await.unwrap().len(), 2);
}

#[tokio::test]
async fn duplicate_email_already_exists() {
    let db = test_db_or_skip!();
    let repo = UserRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    repo.create(&ctx, &factories::student("u1")).await.unwrap();
    let twin = User::new("u2", "twin", "u1@example.com", Role::Student, "").unwrap();

    let err = repo.create(&ctx, &twin).await.unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists(_)), "{:?}", err);
}

#[tokio::test]
async fn update_and_delete() {
    let db = test_db_or_skip!();
    let repo = UserRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    let mut user = factories::teacher("u1");
    repo.create(&ctx, &user).await.unwrap();
    user.update_username("renamed").unwrap();
    repo.update(&ctx, &user).await.unwrap();
    assert_eq!(repo.get(&ctx, "u1").await.unwrap().username(), "renamed");

    repo.delete(&ctx, "u1").await.unwrap();
    assert!(repo.get(&ctx, "u1").await.unwrap_err().is_not_found());
    assert!(repo.delete(&ctx, "u1").await.unwrap_err().is_not_found());
    assert!(repo.update(&ctx, &user).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn unknown_stored_role_is_a_data_integrity_error() {
    let db = test_db_or_skip!();
    let repo = UserRepositoryImpl::new(db.database());
    let ctx = OperationContext::background();

    repo.create(&ctx, &factories::student("u1")).await.unwrap();
    db.execute("UPDATE users SET role = 'janitor' WHERE id = 'u1'");

    let err = repo.get(&ctx, "u1").await.unwrap_err();
    assert!(matches!(err, AppError::DataIntegrityError(_)), "{:?}", err);
}
