//! Data model types and input coercion for the book catalog.
//!
//! This crate defines the `Book` record and the shell-boundary validation
//! helpers without any database dependencies. Consumers can use these types
//! directly for display or pass them to `shelf-db` for persistence.

pub mod input;
pub mod types;

pub use input::{BookFields, BookInput, ValidationError};
pub use types::{Book, BookFilter};
