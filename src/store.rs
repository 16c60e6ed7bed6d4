//! SQLite connection and book table DDL. The pool holds a single connection
//! that lives as long as the process.

use crate::config::StoreConfig;
use crate::error::{AppError, ConfigError};
use crate::sql::{create_table, BOOK_TABLE};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Open the database in `config.database_url`, creating the file if needed.
pub async fn open_pool(config: &StoreConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| ConfigError::Invalid {
            key: "DATABASE_URL",
            message: e.to_string(),
        })?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

pub async fn ensure_book_table(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = create_table();
    tracing::debug!(sql = %ddl, "ensure table");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Whether the book table is present in `sqlite_master`.
pub async fn book_table_exists(pool: &SqlitePool) -> Result<bool, AppError> {
    let found: Option<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
    )
    .bind(BOOK_TABLE)
    .fetch_optional(pool)
    .await?;
    Ok(found.is_some())
}

/// Open the pool and create the book table. Call once before serving.
pub async fn open_store(config: &StoreConfig) -> Result<SqlitePool, AppError> {
    let pool = open_pool(config).await?;
    ensure_book_table(&pool).await?;
    tracing::info!(database_url = %config.database_url, "store ready");
    Ok(pool)
}
