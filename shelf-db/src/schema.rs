//! SQLite schema creation for the catalog file.

use std::path::PathBuf;

use rusqlite::Connection;

// AUTOINCREMENT so ids keep increasing and are never reused after a delete.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS book (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    author TEXT,
    year INTEGER,
    isbn INTEGER
);
"#;

/// Create the book table if it doesn't exist.
///
/// This is idempotent — safe to call on an existing catalog.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Default catalog location: `library.db` under the platform data dir.
///
/// Used by the shells when the caller supplies no path.
pub fn default_catalog_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("shelf").join("library.db")
}
