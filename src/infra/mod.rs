//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the relational store

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    BookRepository, BookStore, LoanRepository, LoanStore, NewUserRecord, NotificationRepository,
    NotificationStore, ReviewRepository, ReviewStore, UserRepository, UserStore,
};
