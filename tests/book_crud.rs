use shelf_track::db::{
    count_books, delete_book, fetch_author, fetch_book, fetch_book_listings, insert_book,
    search_books, update_author, update_quantity, update_title,
};
use shelf_track::{initialize, Book, CatalogError, Store};
use tempfile::TempDir;

fn seeded_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("ebookstore.db"));
    initialize(&store).unwrap();
    (dir, store)
}

fn book(id: i64, title: &str, author_id: i64, quantity: i64) -> Book {
    Book {
        id,
        title: title.to_string(),
        author_id,
        quantity,
    }
}

#[test]
fn add_then_search_returns_the_new_row() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    let added = book(9999, "Test Title", 1290, 5);
    insert_book(&conn, &added).unwrap();

    assert_eq!(search_books(&conn, "Test").unwrap(), vec![added]);
}

#[test]
fn search_is_a_substring_match_and_may_be_empty() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    let ids: Vec<i64> = search_books(&conn, "the")
        .unwrap()
        .iter()
        .map(|book| book.id)
        .collect();
    // Default LIKE collation ignores ASCII case.
    assert_eq!(ids, [3002, 3003, 3004]);

    assert!(search_books(&conn, "Moby Dick").unwrap().is_empty());
}

#[test]
fn duplicate_id_is_a_constraint_violation() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    let err = insert_book(&conn, &book(3001, "Impostor", 8937, 1)).unwrap_err();
    assert!(matches!(err, CatalogError::ConstraintViolation(_)));

    let original = fetch_book(&conn, 3001).unwrap().unwrap();
    assert_eq!(original, book(3001, "A Tale of Two Cities", 1290, 30));
    assert_eq!(count_books(&conn).unwrap(), 5);
}

#[test]
fn update_quantity_leaves_other_fields() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    assert_eq!(update_quantity(&conn, 3001, 99).unwrap(), 1);

    let updated = fetch_book(&conn, 3001).unwrap().unwrap();
    assert_eq!(updated, book(3001, "A Tale of Two Cities", 1290, 99));
}

#[test]
fn update_title_and_author() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    update_title(&conn, 3004, "The Hobbit").unwrap();
    update_author(&conn, 6380, "John Ronald Reuel Tolkien", "England").unwrap();

    assert_eq!(fetch_book(&conn, 3004).unwrap().unwrap().title, "The Hobbit");
    let author = fetch_author(&conn, 6380).unwrap().unwrap();
    assert_eq!(author.name, "John Ronald Reuel Tolkien");
    assert_eq!(author.country, "England");
}

#[test]
fn deleting_a_missing_id_is_not_an_error() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    assert_eq!(delete_book(&conn, 1).unwrap(), 0);
    assert_eq!(count_books(&conn).unwrap(), 5);

    assert_eq!(delete_book(&conn, 3005).unwrap(), 1);
    assert_eq!(count_books(&conn).unwrap(), 4);
    assert!(fetch_author(&conn, 5620).unwrap().is_some());
}

#[test]
fn view_all_excludes_orphans_that_search_still_finds() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    let orphan = book(7777, "Orphaned Manuscript", 4242, 3);
    insert_book(&conn, &orphan).unwrap();

    let listings = fetch_book_listings(&conn).unwrap();
    assert_eq!(listings.len(), 5);
    assert!(listings.iter().all(|row| row.title != "Orphaned Manuscript"));

    assert_eq!(search_books(&conn, "Orphaned").unwrap(), vec![orphan.clone()]);
    assert_eq!(fetch_book(&conn, 7777).unwrap(), Some(orphan));
}

#[test]
fn listings_carry_author_details() {
    let (_dir, store) = seeded_store();
    let conn = store.connect().unwrap();

    let first = &fetch_book_listings(&conn).unwrap()[0];
    assert_eq!(first.title, "A Tale of Two Cities");
    assert_eq!(first.author_name, "Charles Dickens");
    assert_eq!(first.author_country, "England");
}
