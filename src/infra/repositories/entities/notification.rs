//! Notification database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Notification, NotificationKind};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Notification {
    fn from(model: Model) -> Self {
        Notification {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            message: model.message,
            // Only `NotificationKind::as_str` values are ever written here
            kind: model.kind.parse().unwrap_or(NotificationKind::Info),
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
