//! Book repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::book::{self, ActiveModel, Entity as BookEntity};
use super::map_unique_violation;
use crate::domain::{Book, NewBook};
use crate::errors::{AppError, AppResult};

/// Book repository trait for dependency injection.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find book by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    /// List the whole catalog
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Check whether any book carries the given title
    async fn exists_by_title(&self, title: &str) -> AppResult<bool>;

    /// Check whether any book carries the given ISBN
    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool>;

    /// Insert a new catalog record
    async fn insert(&self, book: NewBook) -> AppResult<Book>;

    /// Store a freshly computed average review rating
    async fn set_rating(&self, id: Uuid, rating: f64) -> AppResult<()>;

    /// Count all books
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of BookRepository backed by SeaORM
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Book::from))
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn exists_by_title(&self, title: &str) -> AppResult<bool> {
        let count = BookEntity::find()
            .filter(book::Column::Title.eq(title))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn exists_by_isbn(&self, isbn: &str) -> AppResult<bool> {
        let count = BookEntity::find()
            .filter(book::Column::Isbn.eq(isbn))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn insert(&self, new_book: NewBook) -> AppResult<Book> {
        let quota = new_book.quota;
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new_book.title),
            author: Set(new_book.author),
            category: Set(new_book.category),
            year: Set(new_book.year),
            description: Set(new_book.description),
            image: Set(new_book.image),
            quota: Set(quota),
            rack_number: Set(new_book.rack_number),
            isbn: Set(new_book.isbn),
            language: Set(new_book.language),
            // Every copy starts on the shelf
            available_copies: Set(quota),
            late_fee: Set(new_book.late_fee),
            can_borrow: Set(true),
            rating: Set(None),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(Book::from(model))
    }

    async fn set_rating(&self, id: Uuid, rating: f64) -> AppResult<()> {
        let book = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = book.into();
        active.rating = Set(Some(rating));
        active.update(&self.db).await.map_err(AppError::from)?;

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        BookEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
