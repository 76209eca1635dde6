//! API-level tests: error/status mapping and response shapes.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use uuid::Uuid;

use digilib::domain::{User, UserResponse, UserRole};
use digilib::errors::AppError;
use digilib::types::StatusMessage;

fn test_user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "reader@library.org".to_string(),
        password_hash: "secret-hash".to_string(),
        name: "Jane Reader".to_string(),
        role: UserRole::User,
        phone: Some("08123456789".to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// =============================================================================
// Error -> status mapping
// =============================================================================

#[tokio::test]
async fn not_found_maps_to_404() {
    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unauthorized_maps_to_401() {
    let response = AppError::Unauthorized.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicates_map_to_400() {
    let response = AppError::DuplicateEmail.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = AppError::DuplicatePhone.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_argument_maps_to_400() {
    let response = AppError::invalid_argument("Unknown role: librarian").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validation_maps_to_400() {
    let response = AppError::validation("Invalid email format").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn internal_maps_to_500() {
    let response = AppError::internal("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Response shapes
// =============================================================================

#[tokio::test]
async fn user_response_exposes_directory_fields_only() {
    let response = UserResponse::from(test_user());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["email"], "reader@library.org");
    assert_eq!(json["role"], "USER");
    assert_eq!(json["phone"], "08123456789");
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn user_response_omits_absent_phone() {
    let mut user = test_user();
    user.phone = None;

    let json = serde_json::to_value(UserResponse::from(user)).unwrap();
    assert!(json.get("phone").is_none());
}

#[tokio::test]
async fn role_serializes_uppercase() {
    assert_eq!(
        serde_json::to_value(UserRole::Admin).unwrap(),
        serde_json::json!("ADMIN")
    );
    assert_eq!(UserRole::Admin.to_string(), "ADMIN");
    assert_eq!(UserRole::User.to_string(), "USER");
}

#[tokio::test]
async fn status_message_shape() {
    let message = StatusMessage::success("User deleted successfully");
    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "User deleted successfully");
}

#[tokio::test]
async fn patch_with_unknown_role_fails_deserialization() {
    // A bad role in the update body is rejected before it reaches the
    // directory
    let result = serde_json::from_str::<digilib::domain::UserPatch>(r#"{"role":"LIBRARIAN"}"#);
    assert!(result.is_err());
}
