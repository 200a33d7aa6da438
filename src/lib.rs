//! Livraria: REST CRUD service for a book catalog over PostgreSQL.

pub mod api_doc;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod state;
pub mod store;

pub use auth::{require_auth, Claims, TokenVerifier};
pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{Book, BookPatch, NewBook};
pub use repository::{BookRepository, InMemoryBookRepository, PostgresBookRepository};
pub use routes::{book_routes, common_routes};
pub use state::AppState;
pub use store::{ensure_books_table, ensure_database_exists};
