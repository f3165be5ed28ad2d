pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use domain::{Book, NewBook};
pub use infra::config::{self, DbConfig};
pub use storage::{BookStore, MemoryBookStore, PgBookStore, StoreError};
