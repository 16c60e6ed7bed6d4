//! Bookshelf: a book CRUD REST backend on SQLite, and the sum-to-n exercise.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod sum;

pub use config::{ServerConfig, StoreConfig};
pub use error::{AppError, ConfigError};
pub use model::{Book, BookChanges, BookField, BookFilter, NewBook};
pub use routes::{app_router, book_routes, common_routes};
pub use server::serve;
pub use service::BookService;
pub use state::AppState;
pub use store::{book_table_exists, ensure_book_table, open_pool, open_store};
pub use sum::{
    sum_to_n_ascending, sum_to_n_descending, sum_to_n_recursive, SumError, SumStrategy, UnknownStrategy,
};
