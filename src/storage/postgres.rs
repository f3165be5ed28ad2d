//! `BookStore` backed by the `books` table in PostgreSQL.

use crate::domain::{Book, NewBook};
use crate::storage::{BookStore, StoreError};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, book: &NewBook) -> Result<Book, StoreError> {
        let row = sqlx::query_as::<_, Book>(
            "INSERT INTO books (author, title, publisher) VALUES ($1, $2, $3)
             RETURNING id, author, title, publisher",
        )
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.publisher)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, book: &Book) -> Result<Book, StoreError> {
        if book.id == 0 {
            let row = sqlx::query_as::<_, Book>(
                "INSERT INTO books (author, title, publisher) VALUES ($1, $2, $3)
                 RETURNING id, author, title, publisher",
            )
            .bind(&book.author)
            .bind(&book.title)
            .bind(&book.publisher)
            .fetch_one(&self.pool)
            .await?;
            return Ok(row);
        }

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Book>(
            "INSERT INTO books (id, author, title, publisher) VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE
             SET author = EXCLUDED.author,
                 title = EXCLUDED.title,
                 publisher = EXCLUDED.publisher
             RETURNING id, author, title, publisher",
        )
        .bind(book.id)
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.publisher)
        .fetch_one(&mut *tx)
        .await?;

        // Move the id sequence past an explicitly written id so later inserts
        // never collide with it. The sequence never moves backwards.
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('books', 'id'),
                           GREATEST($1 + 1, nextval(pg_get_serial_sequence('books', 'id'))),
                           false)",
        )
        .bind(row.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn find(&self, id: i64) -> Result<Book, StoreError> {
        sqlx::query_as::<_, Book>("SELECT id, author, title, publisher FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, author, title, publisher FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
