//! Book review entity and projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stored review row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Review as listed to clients: joined with the book title and the
/// reviewer's display name.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: Uuid,
    #[schema(example = "The Rust Programming Language")]
    pub book_title: String,
    #[schema(example = "Jane Reader")]
    pub reviewer_name: String,
    pub date: DateTime<Utc>,
    #[schema(example = 4.5)]
    pub rating: f64,
    pub content: String,
}

/// Review submission payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub book_id: Uuid,
    pub user_id: Uuid,
    #[schema(example = 4.5)]
    pub rating: f64,
    #[schema(example = "Clear and thorough.")]
    pub content: String,
}
