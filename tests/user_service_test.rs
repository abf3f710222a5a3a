//! User service unit tests against a mocked repository.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use userflow_api::domain::{UpdateUserRequest, User, UserRequest};
use userflow_api::errors::{AppError, AppResult};
use userflow_api::infra::UserRepository;
use userflow_api::services::{UserManager, UserService};

mock! {
    UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn save(&self, user: User) -> AppResult<User>;
        async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
        async fn find_all(&self) -> AppResult<Vec<User>>;
        async fn delete(&self, user: User) -> AppResult<User>;
    }
}

fn stored_user(id: &str) -> User {
    User {
        id: Some(id.to_string()),
        name: "Valdir Cezar".to_string(),
        email: "valdir@mail.com".to_string(),
        password: "123".to_string(),
    }
}

fn service(repo: MockUserRepo) -> UserManager {
    UserManager::new(Arc::new(repo))
}

#[tokio::test]
async fn save_persists_mapped_entity() {
    let mut repo = MockUserRepo::new();
    repo.expect_save()
        .withf(|user| user.id.is_none() && user.name == "Valdir Cezar")
        .once()
        .returning(|user| {
            Ok(User {
                id: Some("6639a1d2e4b0f61c9a8b4567".to_string()),
                ..user
            })
        });

    let request = UserRequest {
        name: "Valdir Cezar".to_string(),
        email: "valdir@mail.com".to_string(),
        password: "123".to_string(),
    };

    let user = service(repo).save(request).await.unwrap();
    assert_eq!(user.id.as_deref(), Some("6639a1d2e4b0f61c9a8b4567"));
    assert_eq!(user.email, "valdir@mail.com");
}

#[tokio::test]
async fn find_by_id_returns_stored_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .withf(|id| id == "abc123")
        .once()
        .returning(|id| Ok(Some(stored_user(id))));

    let user = service(repo).find_by_id("abc123").await.unwrap();
    assert_eq!(user.id.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn find_by_id_miss_maps_to_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().once().returning(|_| Ok(None));

    let err = service(repo).find_by_id("123").await.unwrap_err();
    match err {
        AppError::NotFound(message) => {
            assert_eq!(message, "Object not found. Id: 123, Type User");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn find_all_returns_every_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_all()
        .once()
        .returning(|| Ok(vec![stored_user("a"), stored_user("b")]));

    let users = service(repo).find_all().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .once()
        .returning(|id| Ok(Some(stored_user(id))));
    repo.expect_save()
        .withf(|user| user.name == "Cezar" && user.email == "valdir@mail.com")
        .once()
        .returning(Ok);

    let request = UpdateUserRequest {
        name: Some("Cezar".to_string()),
        ..Default::default()
    };

    let user = service(repo).update("abc123", request).await.unwrap();
    assert_eq!(user.name, "Cezar");
    assert_eq!(user.password, "123");
}

#[tokio::test]
async fn update_missing_user_fails_with_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().once().returning(|_| Ok(None));
    repo.expect_save().never();

    let err = service(repo)
        .update("123", UpdateUserRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_returns_removed_entity() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .once()
        .returning(|id| Ok(Some(stored_user(id))));
    repo.expect_delete()
        .withf(|user| user.id.as_deref() == Some("abc123"))
        .once()
        .returning(Ok);

    let user = service(repo).delete("abc123").await.unwrap();
    assert_eq!(user.id.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn delete_missing_user_fails_with_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().once().returning(|_| Ok(None));
    repo.expect_delete().never();

    let err = service(repo).delete("123").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
