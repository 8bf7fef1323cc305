use shelf_db::BookStore;

#[test]
fn insert_then_list_round_trip() {
    let store = BookStore::open_memory().unwrap();
    let id = store
        .insert("The Sun Also Rises", "Ernest Hemingway", 1926, 9780743297330)
        .unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
    let book = &books[0];
    assert_eq!(book.id, id);
    assert_eq!(book.title, "The Sun Also Rises");
    assert_eq!(book.author, "Ernest Hemingway");
    assert_eq!(book.year, 1926);
    assert_eq!(book.isbn, 9780743297330);
}

#[test]
fn ids_are_unique_and_increasing() {
    let store = BookStore::open_memory().unwrap();
    let a = store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    let b = store.insert("Dune Messiah", "Frank Herbert", 1969, 222).unwrap();
    let c = store.insert("Children of Dune", "Frank Herbert", 1976, 333).unwrap();
    assert!(a < b && b < c);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let store = BookStore::open_memory().unwrap();
    store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    let b = store.insert("Dune Messiah", "Frank Herbert", 1969, 222).unwrap();

    store.delete(b).unwrap();
    let c = store.insert("Children of Dune", "Frank Herbert", 1976, 333).unwrap();
    assert!(c > b);
}

#[test]
fn update_replaces_all_fields() {
    let store = BookStore::open_memory().unwrap();
    let id = store.insert("Dnue", "Frank Hebrert", 1966, 110).unwrap();

    store.update(id, "Dune", "Frank Herbert", 1965, 111).unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
    let book = &books[0];
    assert_eq!(book.id, id);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.year, 1965);
    assert_eq!(book.isbn, 111);
}

#[test]
fn update_missing_id_is_silent() {
    let store = BookStore::open_memory().unwrap();
    // Zero rows affected is fine
    store.update(9999, "Dune", "Frank Herbert", 1965, 111).unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn delete_removes_record() {
    let store = BookStore::open_memory().unwrap();
    let a = store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    let b = store.insert("Emma", "Jane Austen", 1815, 222).unwrap();

    store.delete(a).unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, b);
}

#[test]
fn delete_missing_id_is_silent() {
    let store = BookStore::open_memory().unwrap();
    store.delete(9999).unwrap();

    let id = store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    store.delete(id).unwrap();
    // Already gone; still not an error
    store.delete(id).unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn store_accepts_unvalidated_values() {
    // Required-field and range checks are the caller's job
    let store = BookStore::open_memory().unwrap();
    let id = store.insert("", "", -350, 0).unwrap();

    let books = store.list_all().unwrap();
    assert_eq!(books[0].id, id);
    assert_eq!(books[0].title, "");
    assert_eq!(books[0].year, -350);
}

#[test]
fn persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let store = BookStore::open(&path).unwrap();
    let id = store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    store.close().unwrap();

    let store = BookStore::open(&path).unwrap();
    let books = store.list_all().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, id);
    assert_eq!(books[0].title, "Dune");
}

#[test]
fn reopen_neither_duplicates_nor_loses_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let store = BookStore::open(&path).unwrap();
    store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    store.insert("Emma", "Jane Austen", 1815, 222).unwrap();
    drop(store);

    // Open twice more; the schema step must not touch existing rows
    let store = BookStore::open(&path).unwrap();
    drop(store);
    let store = BookStore::open(&path).unwrap();
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn ids_keep_increasing_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let store = BookStore::open(&path).unwrap();
    let a = store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    store.close().unwrap();

    let store = BookStore::open(&path).unwrap();
    let b = store.insert("Emma", "Jane Austen", 1815, 222).unwrap();
    assert!(b > a);
}

#[test]
fn close_succeeds_on_clean_store() {
    let store = BookStore::open_memory().unwrap();
    store.insert("Dune", "Frank Herbert", 1965, 111).unwrap();
    store.close().unwrap();
}
