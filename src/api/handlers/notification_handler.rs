//! Notification handlers.
//!
//! These endpoints take their arguments as query parameters, matching
//! the admin frontend's existing calls.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::Notification;
use crate::errors::AppResult;
use crate::types::StatusMessage;

/// Query parameters for listing notifications
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListNotificationsQuery {
    /// Addressee user id
    pub user_id: Uuid,
}

/// Query parameters for marking a notification read
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadQuery {
    /// Notification id
    pub notif_id: Uuid,
}

/// Query parameters for creating a notification
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationQuery {
    /// Addressee user id
    pub user_id: Uuid,
    /// Short headline
    pub title: String,
    /// Notification body
    pub message: String,
    /// Category: INFO, WARNING, OVERDUE or REMINDER
    #[serde(rename = "type")]
    pub kind: String,
}

/// Create notification routes
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_notifications)
                .put(mark_notification_read)
                .post(create_notification),
        )
        .route("/:notif_id", delete(delete_notification))
}

/// List a user's notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notifications",
    params(ListNotificationsQuery),
    responses(
        (status = 200, description = "Notifications for the user", body = [Notification])
    )
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = state.notifications.list_for_user(query.user_id).await?;

    Ok(Json(notifications))
}

/// Mark a notification as read
#[utoipa::path(
    put,
    path = "/api/notifications",
    tag = "Notifications",
    params(MarkReadQuery),
    responses(
        (status = 200, description = "Notification updated", body = Notification),
        (status = 404, description = "No such notification")
    )
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Query(query): Query<MarkReadQuery>,
) -> AppResult<Json<Notification>> {
    let notification = state.notifications.mark_read(query.notif_id).await?;

    Ok(Json(notification))
}

/// Create a notification for a user
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = "Notifications",
    params(CreateNotificationQuery),
    responses(
        (status = 200, description = "Notification created", body = Notification),
        (status = 400, description = "Unknown notification type"),
        (status = 404, description = "No such user")
    )
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Query(query): Query<CreateNotificationQuery>,
) -> AppResult<Json<Notification>> {
    let kind = query.kind.parse()?;
    let notification = state
        .notifications
        .create(query.user_id, query.title, query.message, kind)
        .await?;

    Ok(Json(notification))
}

/// Delete a notification
#[utoipa::path(
    delete,
    path = "/api/notifications/{notif_id}",
    tag = "Notifications",
    params(("notif_id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification deleted", body = StatusMessage),
        (status = 404, description = "No such notification")
    )
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(notif_id): Path<Uuid>,
) -> AppResult<Json<StatusMessage>> {
    state.notifications.delete(notif_id).await?;

    Ok(Json(StatusMessage::success(
        "Notification deleted successfully",
    )))
}
