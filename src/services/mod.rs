//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits for
//! dependency inversion; the backing store is always injected, never
//! reached through ambient state.

mod auth_service;
mod book_service;
mod notification_service;
mod review_service;
mod statistic_service;
mod user_service;

pub use auth_service::{AuthService, AuthSession, Authenticator};
pub use book_service::{BookManager, BookService};
pub use notification_service::{NotificationManager, NotificationService};
pub use review_service::{ReviewManager, ReviewService};
pub use statistic_service::{StatisticAggregator, StatisticService, StatisticSummary};
pub use user_service::{UserDirectory, UserService};
