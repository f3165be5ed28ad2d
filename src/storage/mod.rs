//! Book persistence.
//!
//! Every `BookStore` method maps to exactly one statement against the backing
//! store. Implementations are shared across concurrent requests and must not
//! need external locking.

use crate::domain::{Book, NewBook};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("book {0} not found")]
    NotFound(i64),

    #[error("invalid database configuration: {0}")]
    InvalidConfig(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait BookStore: Send + Sync {
    /// Inserts a new row and returns it with its assigned id.
    async fn insert(&self, book: &NewBook) -> Result<Book, StoreError>;

    /// Writes every field of `book`.
    ///
    /// An id of `0` inserts a new row. Any other id is written through without
    /// an existence check: the row is replaced, or created if absent.
    async fn save(&self, book: &Book) -> Result<Book, StoreError>;

    /// Deletes the row with `id`, returning the number of rows removed.
    /// Deleting an absent id is not an error.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    async fn find(&self, id: i64) -> Result<Book, StoreError>;

    /// All rows in the store's natural order.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;
}
