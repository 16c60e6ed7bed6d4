//! Request extractors.

mod book_id;
pub use book_id::BookId;
