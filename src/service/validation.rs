//! Request body checks: known fields only, required fields present, text where text is expected.

use crate::error::AppError;
use crate::model::{BookChanges, BookField, NewBook};
use serde_json::{Map, Value};

const WRITABLE: [BookField; 2] = [BookField::Name, BookField::Author];

pub struct RequestValidator;

impl RequestValidator {
    /// Create body: `name` and `author` are both required.
    pub fn new_book(body: &Map<String, Value>) -> Result<NewBook, AppError> {
        check_fields(body)?;
        Ok(NewBook {
            name: required_text(body, BookField::Name)?,
            author: required_text(body, BookField::Author)?,
        })
    }

    /// Update body: any subset of `name` and `author`, but not none.
    pub fn book_changes(body: &Map<String, Value>) -> Result<BookChanges, AppError> {
        check_fields(body)?;
        let changes = BookChanges {
            name: optional_text(body, BookField::Name)?,
            author: optional_text(body, BookField::Author)?,
        };
        if changes.is_empty() {
            return Err(AppError::BadRequest(
                "update requires at least one of: name, author".into(),
            ));
        }
        Ok(changes)
    }
}

fn check_fields(body: &Map<String, Value>) -> Result<(), AppError> {
    for key in body.keys() {
        let field: BookField = key.parse()?;
        if !WRITABLE.contains(&field) {
            return Err(AppError::BadRequest(format!("{} is assigned by the store", field)));
        }
    }
    Ok(())
}

fn required_text(body: &Map<String, Value>, field: BookField) -> Result<String, AppError> {
    optional_text(body, field)?.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

fn optional_text(body: &Map<String, Value>, field: BookField) -> Result<Option<String>, AppError> {
    match body.get(field.column()) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) => Err(AppError::Validation(format!("{} must not be null", field))),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}
