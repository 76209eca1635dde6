//! Book catalog service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Book, NewBook};
use crate::errors::{AppError, AppResult};
use crate::infra::BookRepository;

/// Book catalog trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Look up a catalog record by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    /// List the whole catalog
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Add a title; title and ISBN must be unique across the catalog
    async fn add(&self, book: NewBook) -> AppResult<Book>;
}

/// Concrete implementation of BookService
pub struct BookManager {
    books: Arc<dyn BookRepository>,
}

impl BookManager {
    /// Create new book service instance
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }
}

#[async_trait]
impl BookService for BookManager {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        self.books.find_by_id(id).await
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        self.books.list().await
    }

    async fn add(&self, book: NewBook) -> AppResult<Book> {
        if self.books.exists_by_title(&book.title).await? {
            return Err(AppError::invalid_argument("Title is already in use"));
        }
        if self.books.exists_by_isbn(&book.isbn).await? {
            return Err(AppError::invalid_argument("ISBN is already in use"));
        }

        self.books.insert(book).await
    }
}
