//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::AuthSession;

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "reader@library.org")]
    pub email: String,
    /// User password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Successful login payload: the authenticated user and an opaque
/// session token. The token is not persisted server-side.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    #[schema(example = "7f1f9a70-93ae-44ab-9276-3f9d6c9d1e2a")]
    pub token: String,
}

impl From<AuthSession> for LoginResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: UserResponse::from(session.user),
            token: session.token,
        }
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/login/admin", post(login_admin))
}

/// Ordinary login; admin accounts are rejected here
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Admin account or bad credentials"),
        (status = 404, description = "No account with this email")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = state.auth.login(&payload.email, &payload.password).await?;

    Ok(Json(LoginResponse::from(session)))
}

/// Admin login; non-admin accounts are rejected here
#[utoipa::path(
    post,
    path = "/api/auth/login/admin",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Non-admin account or bad credentials"),
        (status = 404, description = "No account with this email")
    )
)]
pub async fn login_admin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = state
        .auth
        .login_admin(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse::from(session)))
}
