//! Review service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{MAX_REVIEW_RATING, MIN_REVIEW_RATING};
use crate::domain::{Review, ReviewRequest, ReviewView};
use crate::errors::{AppError, AppResult};
use crate::infra::{BookRepository, ReviewRepository, UserRepository};

/// Review service trait for dependency injection.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// List reviews newest-first, optionally scoped to one book and capped
    async fn list(&self, book_id: Option<Uuid>, max: Option<u64>) -> AppResult<Vec<ReviewView>>;

    /// Submit a review and refresh the book's stored average rating
    async fn submit(&self, request: ReviewRequest) -> AppResult<Review>;
}

/// Concrete implementation of ReviewService
pub struct ReviewManager {
    reviews: Arc<dyn ReviewRepository>,
    books: Arc<dyn BookRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReviewManager {
    /// Create new review service instance
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        books: Arc<dyn BookRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reviews,
            books,
            users,
        }
    }
}

#[async_trait]
impl ReviewService for ReviewManager {
    async fn list(&self, book_id: Option<Uuid>, max: Option<u64>) -> AppResult<Vec<ReviewView>> {
        self.reviews.list_views(book_id, max).await
    }

    async fn submit(&self, request: ReviewRequest) -> AppResult<Review> {
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&request.rating) {
            return Err(AppError::invalid_argument(format!(
                "Rating must be between {} and {}",
                MIN_REVIEW_RATING, MAX_REVIEW_RATING
            )));
        }

        if self.books.find_by_id(request.book_id).await?.is_none() {
            return Err(AppError::NotFound);
        }
        if self.users.find_by_id(request.user_id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        let review = self
            .reviews
            .insert(
                request.book_id,
                request.user_id,
                request.rating,
                request.content,
            )
            .await?;

        // Keep the catalog's denormalized rating in step with the reviews
        if let Some(avg) = self.reviews.average_for_book(request.book_id).await? {
            self.books.set_rating(request.book_id, avg).await?;
        }

        Ok(review)
    }
}
