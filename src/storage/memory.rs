//! In-process `BookStore`, used by the HTTP tests.

use crate::domain::{Book, NewBook};
use crate::storage::{BookStore, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Book>,
    last_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Rows keyed by id; listing returns them in ascending id order.
#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, book: &NewBook) -> Result<Book, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let row = Book::from_new(id, book);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn save(&self, book: &Book) -> Result<Book, StoreError> {
        let mut inner = self.inner.write().await;
        let mut row = book.clone();
        if row.id == 0 {
            row.id = inner.next_id();
        } else if row.id > inner.last_id {
            // Keep later inserts from colliding with an explicitly written id.
            inner.last_id = row.id;
        }
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn find(&self, id: i64) -> Result<Book, StoreError> {
        let inner = self.inner.read().await;
        inner.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }
}
