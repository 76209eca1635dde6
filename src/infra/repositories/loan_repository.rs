//! Loan repository implementation.
//!
//! Borrowing workflows live outside this service; the statistics
//! dashboard only counts the rows.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use super::entities::loan::Entity as LoanEntity;
use crate::errors::{AppError, AppResult};

/// Loan repository trait for dependency injection.
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Count all borrow transactions
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of LoanRepository backed by SeaORM
pub struct LoanStore {
    db: DatabaseConnection,
}

impl LoanStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LoanRepository for LoanStore {
    async fn count(&self) -> AppResult<u64> {
        LoanEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
