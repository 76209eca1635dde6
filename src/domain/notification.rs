//! User notification entity.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    Info,
    Warning,
    Overdue,
    Reminder,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "INFO",
            NotificationKind::Warning => "WARNING",
            NotificationKind::Overdue => "OVERDUE",
            NotificationKind::Reminder => "REMINDER",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INFO" => Ok(NotificationKind::Info),
            "WARNING" => Ok(NotificationKind::Warning),
            "OVERDUE" => Ok(NotificationKind::Overdue),
            "REMINDER" => Ok(NotificationKind::Reminder),
            other => Err(AppError::invalid_argument(format!(
                "Unknown notification type: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification addressed to a single user
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Book due soon")]
    pub title: String,
    #[schema(example = "\"The Rust Programming Language\" is due in 2 days.")]
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
