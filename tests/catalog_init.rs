use rusqlite::Connection;
use shelf_track::db::{
    count_authors, count_books, create_tables, fetch_author, fetch_book, populate_initial_data,
};
use shelf_track::{initialize, Store};
use tempfile::TempDir;

fn temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("ebookstore.db"));
    (dir, store)
}

#[test]
fn initialize_seeds_five_books_and_five_authors() {
    let (_dir, store) = temp_store();
    initialize(&store).unwrap();

    let conn = store.connect().unwrap();
    assert_eq!(count_books(&conn).unwrap(), 5);
    assert_eq!(count_authors(&conn).unwrap(), 5);

    let book = fetch_book(&conn, 3002).unwrap().unwrap();
    assert_eq!(book.title, "Harry Potter and the Philosopher's Stone");
    assert_eq!(book.author_id, 8937);
    assert_eq!(book.quantity, 40);

    let author = fetch_author(&conn, 6380).unwrap().unwrap();
    assert_eq!(author.name, "J.R.R. Tolkien");
    assert_eq!(author.country, "South Africa");
}

#[test]
fn initialize_twice_is_idempotent() {
    let (_dir, store) = temp_store();
    initialize(&store).unwrap();
    initialize(&store).unwrap();

    let conn = store.connect().unwrap();
    assert_eq!(count_books(&conn).unwrap(), 5);
    assert_eq!(count_authors(&conn).unwrap(), 5);
}

#[test]
fn seeding_keeps_existing_rows_with_seed_ids() {
    let (_dir, store) = temp_store();
    create_tables(&store).unwrap();
    {
        let conn = store.connect().unwrap();
        conn.execute(
            "INSERT INTO book VALUES (3001, 'Operator Copy', 1290, 1)",
            [],
        )
        .unwrap();
    }

    populate_initial_data(&store).unwrap();

    let conn = store.connect().unwrap();
    let book = fetch_book(&conn, 3001).unwrap().unwrap();
    assert_eq!(book.title, "Operator Copy");
    assert_eq!(book.quantity, 1);
    assert_eq!(count_books(&conn).unwrap(), 5);
}

#[test]
fn schema_matches_on_disk_column_names() {
    let (_dir, store) = temp_store();
    create_tables(&store).unwrap();

    let conn = Connection::open(store.path()).unwrap();
    let columns = |table: &str| -> Vec<String> {
        let mut stmt = conn
            .prepare(&format!("SELECT name FROM pragma_table_info('{table}') ORDER BY cid"))
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap()
    };

    assert_eq!(columns("book"), ["id", "title", "authorID", "qty"]);
    assert_eq!(columns("author"), ["id", "name", "country"]);
}
