//! Notification service unit tests over mocked repositories.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use digilib::domain::{Notification, NotificationKind, User, UserRole};
use digilib::errors::{AppError, AppResult};
use digilib::infra::{NewUserRecord, NotificationRepository, UserRepository};
use digilib::services::{NotificationManager, NotificationService};

mock! {
    pub NotificationRepo {}

    #[async_trait]
    impl NotificationRepository for NotificationRepo {
        async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;
        async fn insert(&self, user_id: Uuid, title: String, message: String, kind: NotificationKind) -> AppResult<Notification>;
        async fn mark_read(&self, id: Uuid) -> AppResult<Notification>;
        async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
        async fn count(&self) -> AppResult<u64>;
    }
}

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

fn test_user(id: Uuid) -> User {
    User {
        id,
        email: "reader@library.org".to_string(),
        password_hash: "hashed".to_string(),
        name: "Jane Reader".to_string(),
        role: UserRole::User,
        phone: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn stored_notification(
    user_id: Uuid,
    title: String,
    message: String,
    kind: NotificationKind,
) -> AppResult<Notification> {
    Ok(Notification {
        id: Uuid::new_v4(),
        user_id,
        title,
        message,
        kind,
        is_read: false,
        created_at: Utc::now(),
    })
}

#[tokio::test]
async fn create_delivers_to_existing_user() {
    let user_id = Uuid::new_v4();

    let mut notifications = MockNotificationRepo::new();
    notifications.expect_insert().returning(stored_notification);

    let mut users = MockUserRepo::new();
    users
        .expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(test_user(id))));

    let service = NotificationManager::new(Arc::new(notifications), Arc::new(users));
    let created = service
        .create(
            user_id,
            "Book due soon".to_string(),
            "Return it by Friday".to_string(),
            NotificationKind::Reminder,
        )
        .await
        .unwrap();

    assert_eq!(created.user_id, user_id);
    assert!(!created.is_read);
    assert_eq!(created.kind, NotificationKind::Reminder);
}

#[tokio::test]
async fn create_for_unknown_user_fails_without_insert() {
    let notifications = MockNotificationRepo::new();
    let mut users = MockUserRepo::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let service = NotificationManager::new(Arc::new(notifications), Arc::new(users));
    let result = service
        .create(
            Uuid::new_v4(),
            "Title".to_string(),
            "Message".to_string(),
            NotificationKind::Info,
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn mark_read_flags_the_notification() {
    let notif_id = Uuid::new_v4();
    let mut notifications = MockNotificationRepo::new();
    notifications
        .expect_mark_read()
        .with(eq(notif_id))
        .returning(|id| {
            Ok(Notification {
                id,
                user_id: Uuid::new_v4(),
                title: "Title".to_string(),
                message: "Message".to_string(),
                kind: NotificationKind::Info,
                is_read: true,
                created_at: Utc::now(),
            })
        });

    let service =
        NotificationManager::new(Arc::new(notifications), Arc::new(MockUserRepo::new()));
    let updated = service.mark_read(notif_id).await.unwrap();

    assert!(updated.is_read);
}

#[tokio::test]
async fn mark_read_unknown_id_fails_not_found() {
    let mut notifications = MockNotificationRepo::new();
    notifications
        .expect_mark_read()
        .returning(|_| Err(AppError::NotFound));

    let service =
        NotificationManager::new(Arc::new(notifications), Arc::new(MockUserRepo::new()));
    let result = service.mark_read(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn notification_kind_parses_strictly() {
    assert_eq!(
        "overdue".parse::<NotificationKind>().unwrap(),
        NotificationKind::Overdue
    );
    assert!("urgent".parse::<NotificationKind>().is_err());
}
