//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services. The backing
//! store is passed in explicitly and threaded through constructor
//! injection; nothing reaches for ambient global state.

use std::sync::Arc;

use crate::infra::{
    BookRepository, BookStore, Database, LoanRepository, LoanStore, NotificationRepository,
    NotificationStore, ReviewRepository, ReviewStore, UserRepository, UserStore,
};
use crate::services::{
    AuthService, Authenticator, BookManager, BookService, NotificationManager,
    NotificationService, ReviewManager, ReviewService, StatisticAggregator, StatisticService,
    UserDirectory, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User directory service
    pub users: Arc<dyn UserService>,
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// Book catalog service
    pub books: Arc<dyn BookService>,
    /// Notification service
    pub notifications: Arc<dyn NotificationService>,
    /// Review service
    pub reviews: Arc<dyn ReviewService>,
    /// Statistics service
    pub statistics: Arc<dyn StatisticService>,
    /// Database handle, kept for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the full service graph over a connected database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let db = database.get_connection();

        let user_repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.clone()));
        let book_repo: Arc<dyn BookRepository> = Arc::new(BookStore::new(db.clone()));
        let review_repo: Arc<dyn ReviewRepository> = Arc::new(ReviewStore::new(db.clone()));
        let notification_repo: Arc<dyn NotificationRepository> =
            Arc::new(NotificationStore::new(db.clone()));
        let loan_repo: Arc<dyn LoanRepository> = Arc::new(LoanStore::new(db));

        Self {
            users: Arc::new(UserDirectory::new(user_repo.clone())),
            auth: Arc::new(Authenticator::new(user_repo.clone())),
            books: Arc::new(BookManager::new(book_repo.clone())),
            notifications: Arc::new(NotificationManager::new(
                notification_repo.clone(),
                user_repo.clone(),
            )),
            reviews: Arc::new(ReviewManager::new(
                review_repo.clone(),
                book_repo.clone(),
                user_repo.clone(),
            )),
            statistics: Arc::new(StatisticAggregator::new(
                book_repo,
                user_repo,
                loan_repo,
                review_repo,
                notification_repo,
            )),
            database,
        }
    }
}
