//! Book entity and the typed inputs the service accepts.

use crate::error::AppError;
use crate::sql::BindValue;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
}

/// Recognized book columns. Only these names ever reach SQL as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    Id,
    Name,
    Author,
}

impl BookField {
    pub const ALL: [BookField; 3] = [BookField::Id, BookField::Name, BookField::Author];

    pub fn column(self) -> &'static str {
        match self {
            BookField::Id => "id",
            BookField::Name => "name",
            BookField::Author => "author",
        }
    }

    /// Parse a filter value for this column. `id` must be an integer.
    pub fn parse_value(self, raw: &str) -> Result<BindValue, AppError> {
        match self {
            BookField::Id => raw
                .trim()
                .parse::<i64>()
                .map(BindValue::Int)
                .map_err(|_| AppError::BadRequest(format!("invalid id filter: {}", raw))),
            BookField::Name | BookField::Author => Ok(BindValue::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for BookField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookField::ALL
            .into_iter()
            .find(|f| f.column() == s)
            .ok_or_else(|| AppError::BadRequest(format!("unknown field: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub author: String,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub name: Option<String>,
    pub author: Option<String>,
}

impl BookChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.author.is_none()
    }

    /// Supplied fields in column order.
    pub fn assignments(&self) -> Vec<(BookField, &str)> {
        let mut out = Vec::new();
        if let Some(name) = &self.name {
            out.push((BookField::Name, name.as_str()));
        }
        if let Some(author) = &self.author {
            out.push((BookField::Author, author.as_str()));
        }
        out
    }
}

/// Conjunction of exact-match terms. Empty means "every book".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    terms: Vec<(BookField, BindValue)>,
}

impl BookFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: BookField, value: impl Into<BindValue>) -> Self {
        self.terms.push((field, value.into()));
        self
    }

    /// Build from query-string pairs. Unknown keys are rejected; terms are
    /// ordered by column so the generated SQL is stable.
    pub fn from_query<I>(params: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut terms = Vec::new();
        for (key, raw) in params {
            let field: BookField = key.parse()?;
            terms.push((field, field.parse_value(&raw)?));
        }
        terms.sort_by_key(|(field, _)| *field);
        Ok(BookFilter { terms })
    }

    pub fn terms(&self) -> &[(BookField, BindValue)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
