//! Storage-layer operations for books, independent of transport.

pub use memory::InMemoryBookRepository;
pub use postgres::PostgresBookRepository;

use crate::error::AppError;
use crate::model::{Book, BookPatch, NewBook};

mod memory;
mod postgres;

#[async_trait::async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book and returns it with its generated id.
    async fn create(&self, new: NewBook) -> Result<Book, AppError>;
    /// Returns all books. No ordering guarantee.
    async fn list(&self) -> Result<Vec<Book>, AppError>;
    /// Returns the book with the given id, or None.
    async fn get(&self, id: i32) -> Result<Option<Book>, AppError>;
    /// Overwrites only the supplied fields. None if the id is absent.
    async fn update(&self, id: i32, patch: BookPatch) -> Result<Option<Book>, AppError>;
    /// Removes the book. Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
    /// Readiness probe against the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}
