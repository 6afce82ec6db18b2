use std::path::{Path, PathBuf};

use log::{error, info};
use rusqlite::{params, Connection};

use super::authors::count_authors;
use super::books::count_books;
use crate::error::CatalogResult;

/// Books inserted on first start: (id, title, authorID, qty).
const SEED_BOOKS: [(i64, &str, i64, i64); 5] = [
    (3001, "A Tale of Two Cities", 1290, 30),
    (3002, "Harry Potter and the Philosopher's Stone", 8937, 40),
    (3003, "The Lion, the Witch and the Wardrobe", 2356, 25),
    (3004, "The Lord of the Rings", 6380, 37),
    (3005, "Alice's Adventures in Wonderland", 5620, 12),
];

/// Authors inserted on first start: (id, name, country).
const SEED_AUTHORS: [(i64, &str, &str); 5] = [
    (1290, "Charles Dickens", "England"),
    (8937, "J.K. Rowling", "England"),
    (2356, "C.S. Lewis", "Ireland"),
    (6380, "J.R.R. Tolkien", "South Africa"),
    (5620, "Lewis Carroll", "England"),
];

/// Handle to the catalog database file. It only remembers where the file
/// lives; every operation opens its own connection through [`Store::connect`]
/// and the connection closes when it goes out of scope.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Remember where the catalog lives. Nothing touches the disk until the
    /// first [`Store::connect`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the database file, used in log lines and tests.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection. SQLite runs in autocommit mode, so each
    /// statement is committed as soon as it succeeds.
    pub fn connect(&self) -> CatalogResult<Connection> {
        Connection::open(&self.path).map_err(|err| {
            error!(
                "event=db_open module=db status=error path={} error={}",
                self.path.display(),
                err
            );
            err.into()
        })
    }
}

/// Create the `book` and `author` tables when they are missing. Column names
/// follow the existing on-disk format (`authorID`, `qty`).
pub fn create_tables(store: &Store) -> CatalogResult<()> {
    let conn = store.connect()?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS book (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            authorID INTEGER,
            qty INTEGER
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS author (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            country TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Insert the seed catalog. `INSERT OR IGNORE` keeps whatever row already
/// owns a given id, so running this again never duplicates or overwrites.
pub fn populate_initial_data(store: &Store) -> CatalogResult<()> {
    let conn = store.connect()?;

    let mut book_stmt = conn.prepare("INSERT OR IGNORE INTO book VALUES (?1, ?2, ?3, ?4)")?;
    let mut books_added = 0;
    for (id, title, author_id, qty) in SEED_BOOKS {
        books_added += book_stmt.execute(params![id, title, author_id, qty])?;
    }

    let mut author_stmt = conn.prepare("INSERT OR IGNORE INTO author VALUES (?1, ?2, ?3)")?;
    let mut authors_added = 0;
    for (id, name, country) in SEED_AUTHORS {
        authors_added += author_stmt.execute(params![id, name, country])?;
    }

    info!(
        "event=db_seed module=db status=ok books_added={} authors_added={}",
        books_added, authors_added
    );
    Ok(())
}

/// Run the whole storage initializer and log the resulting row counts.
/// Called once before the menu starts.
pub fn initialize(store: &Store) -> CatalogResult<()> {
    create_tables(store)?;
    populate_initial_data(store)?;

    let conn = store.connect()?;
    info!(
        "event=db_init module=db status=ok path={} books={} authors={}",
        store.path().display(),
        count_books(&conn)?,
        count_authors(&conn)?
    );
    Ok(())
}
