//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Built once at startup from an already-initialized pool; handlers never
/// open connections themselves.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
