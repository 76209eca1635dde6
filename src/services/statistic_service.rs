//! Statistics dashboard service.
//!
//! Aggregates counts and averages across the library's tables.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::DEFAULT_RECENT_REVIEWS;
use crate::domain::ReviewView;
use crate::errors::AppResult;
use crate::infra::{
    BookRepository, LoanRepository, NotificationRepository, ReviewRepository, UserRepository,
};

/// Aggregate usage numbers for the admin dashboard
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticSummary {
    #[schema(example = 120)]
    pub total_book: u64,
    #[schema(example = 48)]
    pub total_user: u64,
    #[schema(example = 310)]
    pub total_transaction: u64,
    #[schema(example = 75)]
    pub total_notifications: u64,
    /// Average over every review, 0.0 when none exist
    #[schema(example = 4.2)]
    pub average_review: f64,
    #[schema(example = 96)]
    pub total_review: u64,
    pub recent_reviews: Vec<ReviewView>,
}

/// Statistics service trait for dependency injection.
#[async_trait]
pub trait StatisticService: Send + Sync {
    /// Build the dashboard summary, including at most `max_recent`
    /// recent reviews
    async fn summary(&self, max_recent: Option<u64>) -> AppResult<StatisticSummary>;
}

/// Concrete implementation of StatisticService
pub struct StatisticAggregator {
    books: Arc<dyn BookRepository>,
    users: Arc<dyn UserRepository>,
    loans: Arc<dyn LoanRepository>,
    reviews: Arc<dyn ReviewRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl StatisticAggregator {
    /// Create new statistics service instance
    pub fn new(
        books: Arc<dyn BookRepository>,
        users: Arc<dyn UserRepository>,
        loans: Arc<dyn LoanRepository>,
        reviews: Arc<dyn ReviewRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            books,
            users,
            loans,
            reviews,
            notifications,
        }
    }
}

#[async_trait]
impl StatisticService for StatisticAggregator {
    async fn summary(&self, max_recent: Option<u64>) -> AppResult<StatisticSummary> {
        let recent_limit = max_recent.unwrap_or(DEFAULT_RECENT_REVIEWS);

        Ok(StatisticSummary {
            total_book: self.books.count().await?,
            total_user: self.users.count().await?,
            total_transaction: self.loans.count().await?,
            total_notifications: self.notifications.count().await?,
            average_review: self.reviews.average_all().await?.unwrap_or(0.0),
            total_review: self.reviews.count().await?,
            recent_reviews: self.reviews.list_views(None, Some(recent_limit)).await?,
        })
    }
}
