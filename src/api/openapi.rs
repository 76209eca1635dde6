//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, book_handler, notification_handler, review_handler, statistic_handler,
    user_handler,
};
use crate::domain::{
    Book, NewBook, Notification, NotificationKind, ReviewRequest, ReviewView, UserPatch,
    UserResponse, UserRole,
};
use crate::services::StatisticSummary;
use crate::types::StatusMessage;

/// OpenAPI documentation for the digital library backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Digital Library API",
        version = "0.1.0",
        description = "Administrative backend for the digital library: users, catalog, reviews, notifications and statistics",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::register_user,
        user_handler::register_admin,
        // Authentication endpoints
        auth_handler::login,
        auth_handler::login_admin,
        // Book endpoints
        book_handler::list_books,
        book_handler::get_book,
        book_handler::add_book,
        // Notification endpoints
        notification_handler::list_notifications,
        notification_handler::mark_notification_read,
        notification_handler::create_notification,
        notification_handler::delete_notification,
        // Review endpoints
        review_handler::list_reviews,
        review_handler::submit_review,
        // Statistics endpoint
        statistic_handler::get_statistics,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            UserPatch,
            Book,
            NewBook,
            Notification,
            NotificationKind,
            ReviewView,
            ReviewRequest,
            StatisticSummary,
            StatusMessage,
            // Handler types
            user_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            statistic_handler::StatisticResponse,
        )
    ),
    tags(
        (name = "Users", description = "User directory operations"),
        (name = "Authentication", description = "Role-segregated login"),
        (name = "Books", description = "Catalog records"),
        (name = "Notifications", description = "Per-user notifications"),
        (name = "Reviews", description = "Book reviews"),
        (name = "Statistics", description = "Aggregate usage numbers")
    )
)]
pub struct ApiDoc;
