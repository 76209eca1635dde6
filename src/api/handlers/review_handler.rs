//! Review handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::domain::{Review, ReviewRequest, ReviewView};
use crate::errors::AppResult;

/// Query parameters for listing reviews
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListReviewsQuery {
    /// Restrict to one book
    pub book_id: Option<uuid::Uuid>,
    /// Cap the number of rows returned
    pub max: Option<u64>,
}

/// Create review routes
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/", get(list_reviews).post(submit_review))
}

/// List reviews, newest first
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "Reviews",
    params(ListReviewsQuery),
    responses(
        (status = 200, description = "Reviews", body = [ReviewView])
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ListReviewsQuery>,
) -> AppResult<Json<Vec<ReviewView>>> {
    let reviews = state.reviews.list(query.book_id, query.max).await?;

    Ok(Json(reviews))
}

/// Submit a review for a book
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Reviews",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review recorded"),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Unknown book or user")
    )
)]
pub async fn submit_review(
    State(state): State<AppState>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state.reviews.submit(payload).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
