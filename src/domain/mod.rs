//! Domain types.

pub mod book;

pub use book::{Book, NewBook};
