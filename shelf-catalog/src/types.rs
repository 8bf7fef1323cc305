//! Data model types for the book catalog.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned by the store on insertion; never changes afterwards.
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    /// Stored numerically; leading zeros are not preserved.
    pub isbn: i64,
}

/// Field-level search filter.
///
/// Unset fields keep their sentinel value (empty string for text, `None`
/// for numbers) and still take part in the store's equality match — see
/// `BookStore::search` in `shelf-db` for the exact contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
    pub isbn: Option<i64>,
}

impl BookFilter {
    /// Filter that matches on a single title.
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Filter that matches on a single author.
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            ..Default::default()
        }
    }
}
