//! Response bodies for book writes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Created {
    pub id: i64,
}

#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}

pub fn created(id: i64) -> (StatusCode, Json<Created>) {
    (StatusCode::CREATED, Json(Created { id }))
}

pub fn message(message: &'static str) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(Message { message }))
}
