//! Notification service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Notification, NotificationKind};
use crate::errors::{AppError, AppResult};
use crate::infra::{NotificationRepository, UserRepository};

/// Notification service trait for dependency injection.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// List a user's notifications, newest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    /// Mark a notification as read
    async fn mark_read(&self, notif_id: Uuid) -> AppResult<Notification>;

    /// Create a notification for an existing user
    async fn create(
        &self,
        user_id: Uuid,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> AppResult<Notification>;

    /// Delete a notification by id
    async fn delete(&self, notif_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of NotificationService
pub struct NotificationManager {
    notifications: Arc<dyn NotificationRepository>,
    users: Arc<dyn UserRepository>,
}

impl NotificationManager {
    /// Create new notification service instance
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            notifications,
            users,
        }
    }
}

#[async_trait]
impl NotificationService for NotificationManager {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        self.notifications.list_by_user(user_id).await
    }

    async fn mark_read(&self, notif_id: Uuid) -> AppResult<Notification> {
        self.notifications.mark_read(notif_id).await
    }

    async fn create(
        &self,
        user_id: Uuid,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> AppResult<Notification> {
        // The addressee must exist before anything is written
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.notifications
            .insert(user_id, title, message, kind)
            .await
    }

    async fn delete(&self, notif_id: Uuid) -> AppResult<()> {
        self.notifications.delete_by_id(notif_id).await
    }
}
