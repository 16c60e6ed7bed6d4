//! Readiness: the store answers and the book table is in place.

use crate::state::AppState;
use crate::store::book_table_exists;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Readiness {
    ready: bool,
    book_table: bool,
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let book_table = match book_table_exists(&state.pool).await {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(error = %e, "readiness query failed");
            false
        }
    };
    let status = if book_table {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(Readiness {
            ready: book_table,
            book_table,
        }),
    )
}

/// GET /ready: 200 once the book table exists, 503 otherwise.
pub fn common_routes(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
