//! Review repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::book::Entity as BookEntity;
use super::entities::review::{self, ActiveModel, Entity as ReviewEntity};
use super::entities::user::Entity as UserEntity;
use crate::domain::{Review, ReviewView};
use crate::errors::{AppError, AppResult};

/// Review repository trait for dependency injection.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// List reviews newest-first, optionally scoped to one book and capped.
    ///
    /// Rows are joined with the book title and the reviewer's display name.
    async fn list_views(&self, book_id: Option<Uuid>, max: Option<u64>)
        -> AppResult<Vec<ReviewView>>;

    /// Insert a new review row
    async fn insert(
        &self,
        book_id: Uuid,
        user_id: Uuid,
        rating: f64,
        content: String,
    ) -> AppResult<Review>;

    /// Average rating over one book's reviews, `None` when it has none
    async fn average_for_book(&self, book_id: Uuid) -> AppResult<Option<f64>>;

    /// Average rating over every review, `None` when there are none
    async fn average_all(&self) -> AppResult<Option<f64>>;

    /// Count all reviews
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of ReviewRepository backed by SeaORM
pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve book titles and reviewer names for a batch of review rows
    async fn join_views(&self, rows: Vec<review::Model>) -> AppResult<Vec<ReviewView>> {
        let book_ids: Vec<Uuid> = rows.iter().map(|r| r.book_id).collect();
        let user_ids: Vec<Uuid> = rows.iter().map(|r| r.user_id).collect();

        let titles: HashMap<Uuid, String> = BookEntity::find()
            .filter(super::entities::book::Column::Id.is_in(book_ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|b| (b.id, b.title))
            .collect();

        let names: HashMap<Uuid, String> = UserEntity::find()
            .filter(super::entities::user::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(rows
            .into_iter()
            .map(|r| ReviewView {
                id: r.id,
                book_title: titles.get(&r.book_id).cloned().unwrap_or_default(),
                reviewer_name: names.get(&r.user_id).cloned().unwrap_or_default(),
                date: r.created_at,
                rating: r.rating,
                content: r.content,
            })
            .collect())
    }
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn list_views(
        &self,
        book_id: Option<Uuid>,
        max: Option<u64>,
    ) -> AppResult<Vec<ReviewView>> {
        let mut query = ReviewEntity::find().order_by_desc(review::Column::CreatedAt);

        if let Some(book_id) = book_id {
            query = query.filter(review::Column::BookId.eq(book_id));
        }
        if let Some(max) = max {
            query = query.limit(max);
        }

        let rows = query.all(&self.db).await.map_err(AppError::from)?;
        self.join_views(rows).await
    }

    async fn insert(
        &self,
        book_id: Uuid,
        user_id: Uuid,
        rating: f64,
        content: String,
    ) -> AppResult<Review> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            book_id: Set(book_id),
            user_id: Set(user_id),
            rating: Set(rating),
            content: Set(content),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Review::from(model))
    }

    async fn average_for_book(&self, book_id: Uuid) -> AppResult<Option<f64>> {
        let ratings: Vec<f64> = ReviewEntity::find()
            .filter(review::Column::BookId.eq(book_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|r| r.rating)
            .collect();

        Ok(average(&ratings))
    }

    async fn average_all(&self) -> AppResult<Option<f64>> {
        let ratings: Vec<f64> = ReviewEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|r| r.rating)
            .collect();

        Ok(average(&ratings))
    }

    async fn count(&self) -> AppResult<u64> {
        ReviewEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

fn average(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}
