//! Book CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::BookId;
use crate::model::BookFilter;
use crate::response::{created, message};
use crate::service::{BookService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let book = RequestValidator::new_book(&body)?;
    let id = BookService::create(&state.pool, &book).await?;
    tracing::info!(id, "book created");
    Ok(created(id))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BookFilter::from_query(params)?;
    let books = BookService::list(&state.pool, &filter).await?;
    Ok(Json(books))
}

pub async fn read(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::get(&state.pool, id)
        .await?
        .ok_or_else(AppError::book_not_found)?;
    Ok(Json(book))
}

pub async fn update(
    State(state): State<AppState>,
    BookId(id): BookId,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let changes = RequestValidator::book_changes(&body)?;
    if BookService::update(&state.pool, id, &changes).await? == 0 {
        return Err(AppError::book_not_found());
    }
    Ok(message("Book updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    if BookService::delete(&state.pool, id).await? == 0 {
        return Err(AppError::book_not_found());
    }
    tracing::info!(id, "book deleted");
    Ok(message("Book deleted successfully"))
}
