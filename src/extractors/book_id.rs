//! Extract the book id from the `/book/:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer book id. Anything that is not an `i64` is rejected with 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("invalid id".into()))?;
        raw.trim()
            .parse::<i64>()
            .map(BookId)
            .map_err(|_| AppError::BadRequest("invalid id".into()))
    }
}
