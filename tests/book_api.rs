use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use bookshelf::{app_router, open_store, AppState, StoreConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = open_store(&StoreConfig {
        database_url: "sqlite::memory:".into(),
    })
    .await
    .unwrap();
    app_router(AppState::new(pool), 64 * 1024)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn dune_lifecycle() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"name": "Dune", "author": "Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1}));

    let (status, body) = send(&app, Method::GET, "/book/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Dune", "author": "Herbert"}));

    let (status, body) = send(&app, Method::DELETE, "/book/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Book deleted successfully"}));

    let (status, body) = send(&app, Method::GET, "/book/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Book not found"}));
}

#[tokio::test]
async fn list_filters_by_query_string() {
    let app = test_app().await;
    for (name, author) in [("Dune", "Herbert"), ("Earthsea", "Le Guin"), ("Tehanu", "Le Guin")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/book",
            Some(json!({"name": name, "author": author})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/book?author=Le%20Guin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 2, "name": "Earthsea", "author": "Le Guin"},
            {"id": 3, "name": "Tehanu", "author": "Le Guin"}
        ])
    );

    let (_, body) = send(&app, Method::GET, "/book?author=Le%20Guin&name=Tehanu", None).await;
    assert_eq!(body, json!([{"id": 3, "name": "Tehanu", "author": "Le Guin"}]));

    let (_, body) = send(&app, Method::GET, "/book?id=1", None).await;
    assert_eq!(body, json!([{"id": 1, "name": "Dune", "author": "Herbert"}]));

    let (_, body) = send(&app, Method::GET, "/book", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (_, body) = send(&app, Method::GET, "/book?author=Nobody", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_rejects_unknown_filter_field() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/book?title=Dune", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "unknown field: title"}));

    let (status, _) = send(&app, Method::GET, "/book?id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_changes_supplied_fields_only() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"name": "Dune", "author": "Herbert"})),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/book/1",
        Some(json!({"author": "Frank Herbert"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Book updated successfully"}));

    let (_, body) = send(&app, Method::GET, "/book/1", None).await;
    assert_eq!(body, json!({"id": 1, "name": "Dune", "author": "Frank Herbert"}));
}

#[tokio::test]
async fn update_missing_book_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::PUT, "/book/7", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Book not found"}));
}

#[tokio::test]
async fn update_with_empty_body_is_bad_request() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"name": "Dune", "author": "Herbert"})),
    )
    .await;
    let (status, body) = send(&app, Method::PUT, "/book/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "update requires at least one of: name, author"})
    );

    let (status, _) = send(&app, Method::PUT, "/book/1", Some(json!({"id": 5}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_twice_is_not_found_the_second_time() {
    let app = test_app().await;
    send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"name": "Dune", "author": "Herbert"})),
    )
    .await;
    let (status, _) = send(&app, Method::DELETE, "/book/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::DELETE, "/book/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Book not found"}));
}

#[tokio::test]
async fn create_requires_name_and_author() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/book", Some(json!({"name": "Dune"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"error": "author is required"}));

    let (status, _) = send(&app, Method::POST, "/book", Some(json!(["Dune"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/book/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid id"}));
}

#[tokio::test]
async fn ready_tracks_the_book_table() {
    let pool = open_store(&StoreConfig {
        database_url: "sqlite::memory:".into(),
    })
    .await
    .unwrap();
    let app = app_router(AppState::new(pool.clone()), 64 * 1024);

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ready": true, "book_table": true}));

    sqlx::query("DROP TABLE book").execute(&pool).await.unwrap();
    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"ready": false, "book_table": false}));
}

#[tokio::test]
async fn store_failure_hides_details() {
    let pool = open_store(&StoreConfig {
        database_url: "sqlite::memory:".into(),
    })
    .await
    .unwrap();
    let app = app_router(AppState::new(pool.clone()), 64 * 1024);
    pool.close().await;

    let (status, body) = send(&app, Method::GET, "/book", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);
}
