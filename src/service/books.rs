//! Book CRUD execution against SQLite.

use crate::error::AppError;
use crate::model::{Book, BookChanges, BookFilter, NewBook};
use crate::sql::{delete, insert, select_by_id, select_list, update, QueryBuf};
use sqlx::SqlitePool;

pub struct BookService;

impl BookService {
    /// Insert one book. Returns the id the store assigned.
    pub async fn create(pool: &SqlitePool, book: &NewBook) -> Result<i64, AppError> {
        let q = insert(book);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, i64>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let id = query.fetch_one(pool).await?;
        Ok(id)
    }

    /// Books matching every filter term, ordered by id.
    pub async fn list(pool: &SqlitePool, filter: &BookFilter) -> Result<Vec<Book>, AppError> {
        let q = select_list(filter);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Book>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Book>, AppError> {
        let q = select_by_id();
        tracing::debug!(sql = %q.sql, id, "query");
        let row = sqlx::query_as::<_, Book>(&q.sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Apply a partial update. Returns the number of rows changed (0 or 1).
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        changes: &BookChanges,
    ) -> Result<u64, AppError> {
        let q = update(id, changes)?;
        Self::execute(pool, &q).await
    }

    /// Delete by id. Returns the number of rows changed (0 or 1).
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let mut q = delete();
        q.params.push(id.into());
        Self::execute(pool, &q).await
    }

    async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}
