//! SQLite persistence layer for the book catalog.
//!
//! Provides schema creation and the record store operations (insert, list,
//! search, update, delete) backed by SQLite (via rusqlite with bundled
//! feature).

pub mod schema;
pub mod store;

pub use schema::{create_schema, default_catalog_path};
pub use store::{BookStore, StorageError};
