//! Book catalog entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Catalog record for a single title.
///
/// Title and ISBN are unique across the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub year: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub quota: i32,
    pub rack_number: Option<String>,
    pub isbn: String,
    pub language: Option<String>,
    pub available_copies: i32,
    pub late_fee: Option<f64>,
    pub can_borrow: bool,
    /// Average of submitted review ratings, refreshed on each submission
    pub rating: Option<f64>,
}

/// Payload for adding a title to the catalog
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "The Rust Programming Language")]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    #[schema(example = "Steve Klabnik")]
    pub author: String,
    pub category: Option<String>,
    #[schema(example = 2019)]
    pub year: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    #[schema(example = 3)]
    pub quota: i32,
    pub rack_number: Option<String>,
    #[validate(length(min = 1, message = "ISBN is required"))]
    #[schema(example = "978-1718500440")]
    pub isbn: String,
    pub language: Option<String>,
    pub late_fee: Option<f64>,
}
