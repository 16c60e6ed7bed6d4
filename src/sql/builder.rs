//! Builds parameterized CREATE, INSERT, SELECT, UPDATE, DELETE for the book table.

use crate::error::AppError;
use crate::model::{BookChanges, BookField, BookFilter, NewBook};
use crate::sql::BindValue;

pub const BOOK_TABLE: &str = "book";

/// Quote identifier for SQLite (safe: only from `BookField`).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list() -> String {
    BookField::ALL
        .iter()
        .map(|f| quoted(f.column()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn create_table() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         {} INTEGER PRIMARY KEY AUTOINCREMENT, \
         {} TEXT NOT NULL, \
         {} TEXT NOT NULL)",
        quoted(BOOK_TABLE),
        quoted(BookField::Id.column()),
        quoted(BookField::Name.column()),
        quoted(BookField::Author.column()),
    )
}

/// INSERT name and author; the store assigns the id, returned via RETURNING.
pub fn insert(book: &NewBook) -> QueryBuf {
    let mut q = QueryBuf::new();
    let name = q.push_param(BindValue::Text(book.name.clone()));
    let author = q.push_param(BindValue::Text(book.author.clone()));
    q.sql = format!(
        "INSERT INTO {} ({}, {}) VALUES (?{}, ?{}) RETURNING {}",
        quoted(BOOK_TABLE),
        quoted(BookField::Name.column()),
        quoted(BookField::Author.column()),
        name,
        author,
        quoted(BookField::Id.column()),
    );
    q
}

/// SELECT by primary key. Caller adds id as sole param.
pub fn select_by_id() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        select_column_list(),
        quoted(BOOK_TABLE),
        quoted(BookField::Id.column())
    );
    q
}

/// SELECT with an exact-match term per filter entry, joined by AND, ORDER BY id.
pub fn select_list(filter: &BookFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (field, val) in filter.terms() {
        let param_num = q.push_param(val.clone());
        where_parts.push(format!("{} = ?{}", quoted(field.column()), param_num));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list(),
        quoted(BOOK_TABLE),
        where_clause,
        quoted(BookField::Id.column())
    );
    q
}

/// UPDATE by id: SET only the supplied fields. An empty change set has no
/// valid statement and is rejected.
pub fn update(id: i64, changes: &BookChanges) -> Result<QueryBuf, AppError> {
    if changes.is_empty() {
        return Err(AppError::BadRequest(
            "update requires at least one of: name, author".into(),
        ));
    }
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (field, value) in changes.assignments() {
        let param_num = q.push_param(BindValue::Text(value.to_string()));
        sets.push(format!("{} = ?{}", quoted(field.column()), param_num));
    }
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        quoted(BOOK_TABLE),
        sets.join(", "),
        quoted(BookField::Id.column()),
        id_param
    );
    Ok(q)
}

/// DELETE by id. Caller adds id as sole param.
pub fn delete() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ?1",
        quoted(BOOK_TABLE),
        quoted(BookField::Id.column())
    );
    q
}
