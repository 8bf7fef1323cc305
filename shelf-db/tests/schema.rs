use rusqlite::Connection;
use shelf_db::{create_schema, default_catalog_path};

#[test]
fn creates_book_table() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();

    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='book')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
}

#[test]
fn schema_is_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn existing_rows_survive_schema_creation() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    conn.execute(
        "INSERT INTO book (title, author, year, isbn) VALUES ('Dune', 'Frank Herbert', 1965, 111)",
        [],
    )
    .unwrap();

    create_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn default_path_uses_fixed_filename() {
    let path = default_catalog_path();
    assert_eq!(path.file_name().unwrap(), "library.db");
}
