//! The record store: durable CRUD and search over one catalog file.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params, Connection};
use thiserror::Error;

use shelf_catalog::{Book, BookFilter};

use crate::schema::create_schema;

/// I/O or SQLite engine failure surfaced by the store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Owns the catalog file handle for the lifetime of the process.
///
/// One instance per catalog file. Every mutating operation is a single
/// statement that commits before returning; there is no grouping and no
/// rollback. Dropping the store releases the handle; [`BookStore::close`]
/// does the same but surfaces any error.
pub struct BookStore {
    conn: Connection,
}

impl BookStore {
    /// Open or create a catalog file at the given path.
    ///
    /// Safe to call repeatedly against the same file; existing records are
    /// kept.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory catalog with the full schema. Useful for testing.
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Append a new record and return its freshly assigned id.
    ///
    /// The store enforces nothing about the values; empty strings and
    /// implausible years are accepted as-is.
    pub fn insert(
        &self,
        title: &str,
        author: &str,
        year: i64,
        isbn: i64,
    ) -> Result<i64, StorageError> {
        self.conn.execute(
            "INSERT INTO book (title, author, year, isbn) VALUES (?1, ?2, ?3, ?4)",
            params![title, author, year, isbn],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Every record currently present, in underlying row order.
    ///
    /// No ORDER BY guarantee; callers must not rely on ordering.
    pub fn list_all(&self) -> Result<Vec<Book>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, author, year, isbn FROM book")?;
        let rows = stmt.query_map([], row_to_book)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Records where ANY field equals its filter value.
    ///
    /// Every filter field takes part in the comparison even when unset:
    /// unset text fields compare as the empty string, and unset numeric
    /// fields bind the empty string against an INTEGER column, which equals
    /// no row. The practical effect is that a single supplied field matches
    /// on exactly that field, while a record whose title is literally ""
    /// also matches an all-unset filter.
    pub fn search(&self, filter: &BookFilter) -> Result<Vec<Book>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, author, year, isbn FROM book
             WHERE title = ?1 OR author = ?2 OR year = ?3 OR isbn = ?4",
        )?;
        let rows = stmt.query_map(
            params![
                filter.title,
                filter.author,
                numeric_param(filter.year),
                numeric_param(filter.isbn),
            ],
            row_to_book,
        )?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Replace all four fields of the record with the given id.
    ///
    /// Zero rows affected is not an error; the id itself is never changed.
    pub fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        year: i64,
        isbn: i64,
    ) -> Result<(), StorageError> {
        self.conn.execute(
            "UPDATE book SET title = ?2, author = ?3, year = ?4, isbn = ?5 WHERE id = ?1",
            params![id, title, author, year, isbn],
        )?;
        Ok(())
    }

    /// Permanently remove the record with the given id.
    ///
    /// Zero rows affected is not an error.
    pub fn delete(&self, id: i64) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM book WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Release the underlying file handle, surfacing any close error.
    ///
    /// No operations are possible afterwards; dropping the store without
    /// calling this releases the handle too, discarding the error.
    pub fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}

/// Bind a set numeric filter as an integer, and an unset one as the empty
/// string, which an INTEGER column never equals.
fn numeric_param(value: Option<i64>) -> Value {
    match value {
        Some(n) => Value::Integer(n),
        None => Value::Text(String::new()),
    }
}

fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
        isbn: row.get(4)?,
    })
}
