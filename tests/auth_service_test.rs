//! Authentication service unit tests over a mocked repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use digilib::domain::{Password, User, UserRole};
use digilib::errors::{AppError, AppResult};
use digilib::infra::{NewUserRecord, UserRepository};
use digilib::services::{AuthService, Authenticator};

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
        async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
        async fn exists_by_phone(&self, phone: &str) -> AppResult<bool>;
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;
        async fn insert(&self, record: NewUserRecord) -> AppResult<User>;
        async fn save(&self, user: User) -> AppResult<User>;
        async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
        async fn count(&self) -> AppResult<u64>;
    }
}

fn account(email: &str, password: &str, role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        name: "Account".to_string(),
        role,
        phone: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn repo_with(user: User) -> MockUserRepo {
    let mut repo = MockUserRepo::new();
    let email = user.email.clone();
    repo.expect_find_by_email()
        .with(eq(email))
        .returning(move |_| Ok(Some(user.clone())));
    repo
}

#[tokio::test]
async fn login_succeeds_for_ordinary_user() {
    let repo = repo_with(account("a@x.com", "password1", UserRole::User));

    let auth = Authenticator::new(Arc::new(repo));
    let session = auth.login("a@x.com", "password1").await.unwrap();

    assert_eq!(session.user.email, "a@x.com");
    // The returned user carries no credential material
    assert!(session.user.password_hash.is_empty());
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn login_rejects_admin_accounts() {
    let repo = repo_with(account("root@x.com", "password1", UserRole::Admin));

    let auth = Authenticator::new(Arc::new(repo));
    let result = auth.login("root@x.com", "password1").await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn login_admin_rejects_ordinary_accounts() {
    let repo = repo_with(account("a@x.com", "password1", UserRole::User));

    let auth = Authenticator::new(Arc::new(repo));
    let result = auth.login_admin("a@x.com", "password1").await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn login_admin_succeeds_for_admin() {
    let repo = repo_with(account("root@x.com", "password1", UserRole::Admin));

    let auth = Authenticator::new(Arc::new(repo));
    let session = auth.login_admin("root@x.com", "password1").await.unwrap();

    assert_eq!(session.user.role, UserRole::Admin);
    assert!(session.user.password_hash.is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let repo = repo_with(account("a@x.com", "password1", UserRole::User));

    let auth = Authenticator::new(Arc::new(repo));
    let result = auth.login("a@x.com", "not-the-password").await;

    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn login_with_unknown_email_is_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_email().returning(|_| Ok(None));

    let auth = Authenticator::new(Arc::new(repo));
    let result = auth.login("ghost@x.com", "password1").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn issued_tokens_are_unique() {
    let user = account("a@x.com", "password1", UserRole::User);
    let mut repo = MockUserRepo::new();
    let stored = user.clone();
    repo.expect_find_by_email()
        .returning(move |_| Ok(Some(stored.clone())));

    let auth = Authenticator::new(Arc::new(repo));
    let first = auth.login("a@x.com", "password1").await.unwrap();
    let second = auth.login("a@x.com", "password1").await.unwrap();

    assert_ne!(first.token, second.token);
}
