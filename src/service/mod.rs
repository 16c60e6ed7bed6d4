//! BookService: book CRUD over the SQL builder, plus request-body validation.

mod books;
mod validation;
pub use books::BookService;
pub use validation::RequestValidator;
