//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod book_repository;
pub(crate) mod entities;
mod loan_repository;
mod notification_repository;
mod review_repository;
mod user_repository;

pub use book_repository::{BookRepository, BookStore};
pub use loan_repository::{LoanRepository, LoanStore};
pub use notification_repository::{NotificationRepository, NotificationStore};
pub use review_repository::{ReviewRepository, ReviewStore};
pub use user_repository::{NewUserRecord, UserRepository, UserStore};

use crate::errors::AppError;

/// Translate a unique-constraint violation raised by the store into the
/// matching typed error. Service-level existence checks are advisory;
/// this keeps a racing insert/update from surfacing as a 500.
pub(crate) fn map_unique_violation(err: sea_orm::DbErr) -> AppError {
    if let Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        if detail.contains("email") {
            return AppError::DuplicateEmail;
        }
        if detail.contains("phone") {
            return AppError::DuplicatePhone;
        }
        return AppError::invalid_argument("Value is already in use");
    }
    AppError::Database(err)
}
