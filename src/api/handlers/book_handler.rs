//! Book catalog handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Book, NewBook};
use crate::errors::{AppError, AppResult};

/// Create book catalog routes
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(add_book))
        .route("/:id", get(get_book))
}

/// List the whole catalog
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "Books",
    responses(
        (status = 200, description = "Catalog records", body = [Book])
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.books.list().await?;

    Ok(Json(books))
}

/// Get a catalog record by id
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "Books",
    params(("id" = Uuid, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "No such book")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Book>> {
    let book = state
        .books
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(book))
}

/// Add a title to the catalog
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "Books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Duplicate title/ISBN or validation error")
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.books.add(payload).await?;

    Ok((StatusCode::CREATED, Json(book)))
}
