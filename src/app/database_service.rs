//! The database service.
//!
//! Owns the PostgreSQL pool for the lifetime of the process. It is responsible for:
//! 1.  Opening the pool from `DbConfig` (the persistence connector).
//! 2.  Creating the `books` table if it does not exist (the schema initializer).
//! 3.  Handing out the `BookStore` the HTTP layer runs its statements against.

use crate::infra::config::DbConfig;
use crate::storage::{PgBookStore, StoreError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;

pub const CREATE_BOOKS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id BIGSERIAL PRIMARY KEY,
    author TEXT,
    title TEXT,
    publisher TEXT
)";

pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    pub fn book_store(&self) -> PgBookStore {
        PgBookStore::new(self.pool.clone())
    }

    /// Connects to the database described by `config`.
    ///
    /// Pool sizing is left at the client defaults. There is no retry; an
    /// unreachable server is returned as an error.
    pub async fn connect(config: &DbConfig) -> Result<Self, StoreError> {
        let options = connect_options(config)?;
        let pool = PgPoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Creates the `books` table if missing. Safe to run on every startup.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_BOOKS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count_books(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*)::bigint FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Builds connect options from the raw config strings.
///
/// Empty values fall back to the client library's defaults (which honour the
/// usual `PG*` variables). A port or SSL mode that does not parse is an error.
pub fn connect_options(config: &DbConfig) -> Result<PgConnectOptions, StoreError> {
    let mut options = PgConnectOptions::new();

    if !config.host.is_empty() {
        options = options.host(&config.host);
    }
    if !config.port.is_empty() {
        let port = config
            .port
            .trim()
            .parse::<u16>()
            .map_err(|_| StoreError::InvalidConfig(format!("invalid port '{}'", config.port)))?;
        options = options.port(port);
    }
    if !config.user.is_empty() {
        options = options.username(&config.user);
    }
    if !config.password.is_empty() {
        options = options.password(&config.password);
    }
    if !config.dbname.is_empty() {
        options = options.database(&config.dbname);
    }
    if !config.sslmode.is_empty() {
        let mode = PgSslMode::from_str(config.sslmode.trim()).map_err(|_| {
            StoreError::InvalidConfig(format!("invalid sslmode '{}'", config.sslmode))
        })?;
        options = options.ssl_mode(mode);
    }

    Ok(options)
}
