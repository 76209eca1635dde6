//! User management handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewUser, UserPatch, UserResponse, UserRole};
use crate::errors::{AppError, AppResult};
use crate::types::StatusMessage;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "reader@library.org")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Reader")]
    pub name: String,
    /// Contact phone number
    #[schema(example = "08123456789")]
    pub phone: Option<String>,
}

impl From<RegisterRequest> for NewUser {
    fn from(req: RegisterRequest) -> Self {
        NewUser {
            email: req.email,
            password: req.password,
            name: req.name,
            phone: req.phone,
        }
    }
}

/// Query parameters for listing users
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Restrict the listing to one role (`USER` or `ADMIN`, any case)
    pub role: Option<String>,
}

/// Create user management routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/register", post(register_user))
        .route("/register/admin", post(register_admin))
}

/// List users, optionally filtered by role
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 400, description = "Unrecognized role value")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.users.find_all(query.role.as_deref()).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a single user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(UserResponse::from(user)))
}

/// Apply a sparse update to a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Duplicate email/phone or invalid field"),
        (status = 404, description = "No such user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(patch): ValidatedJson<UserPatch>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users.update(patch, id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Deletion acknowledged", body = StatusMessage),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StatusMessage>> {
    state.users.delete_by_id(id).await?;

    Ok(Json(StatusMessage::success("User deleted successfully")))
}

/// Register an ordinary user account
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Email already in use or validation error")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .users
        .register(payload.into(), UserRole::User)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Register an administrator account
#[utoipa::path(
    post,
    path = "/api/users/register/admin",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Admin registered", body = UserResponse),
        (status = 400, description = "Email already in use or validation error")
    )
)]
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .users
        .register(payload.into(), UserRole::Admin)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
