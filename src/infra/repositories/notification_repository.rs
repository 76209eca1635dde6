//! Notification repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::notification::{self, ActiveModel, Entity as NotificationEntity};
use crate::domain::{Notification, NotificationKind};
use crate::errors::{AppError, AppResult};

/// Notification repository trait for dependency injection.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// List a user's notifications, newest first
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    /// Insert a new notification, initially unread
    async fn insert(
        &self,
        user_id: Uuid,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> AppResult<Notification>;

    /// Flag a notification as read; fails `NotFound` on unknown id
    async fn mark_read(&self, id: Uuid) -> AppResult<Notification>;

    /// Delete a notification; fails `NotFound` on unknown id
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;

    /// Count all notifications
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of NotificationRepository backed by SeaORM
pub struct NotificationStore {
    db: DatabaseConnection,
}

impl NotificationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        let models = NotificationEntity::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Notification::from).collect())
    }

    async fn insert(
        &self,
        user_id: Uuid,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> AppResult<Notification> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            title: Set(title),
            message: Set(message),
            kind: Set(kind.as_str().to_string()),
            is_read: Set(false),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Notification::from(model))
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<Notification> {
        let notification = NotificationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = notification.into();
        active.is_read = Set(true);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Notification::from(model))
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        let result = NotificationEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        NotificationEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
