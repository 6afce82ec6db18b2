use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{map_constraint, CatalogResult};
use crate::models::{Book, BookListing};

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author_id: row.get(2)?,
        quantity: row.get(3)?,
    })
}

/// Insert a new book. A taken id surfaces as `ConstraintViolation` and nothing
/// is written.
pub fn insert_book(conn: &Connection, book: &Book) -> CatalogResult<()> {
    conn.execute(
        "INSERT INTO book (id, title, authorID, qty) VALUES (?1, ?2, ?3, ?4)",
        params![book.id, book.title, book.author_id, book.quantity],
    )
    .map_err(map_constraint)?;
    Ok(())
}

/// Look up a single book by id. `None` means no row owns that id, which the
/// update flow turns into a not-found answer.
pub fn fetch_book(conn: &Connection, id: i64) -> CatalogResult<Option<Book>> {
    let book = conn
        .query_row(
            "SELECT id, title, authorID, qty FROM book WHERE id = ?1",
            params![id],
            book_from_row,
        )
        .optional()?;
    Ok(book)
}

/// Overwrite the on-hand quantity. Returns the number of rows touched; the
/// caller has already confirmed the book exists.
pub fn update_quantity(conn: &Connection, id: i64, quantity: i64) -> CatalogResult<usize> {
    let updated = conn.execute(
        "UPDATE book SET qty = ?1 WHERE id = ?2",
        params![quantity, id],
    )?;
    Ok(updated)
}

/// Replace a book's title, leaving author and quantity untouched.
pub fn update_title(conn: &Connection, id: i64, title: &str) -> CatalogResult<usize> {
    let updated = conn.execute(
        "UPDATE book SET title = ?1 WHERE id = ?2",
        params![title, id],
    )?;
    Ok(updated)
}

/// Delete by id. Returns the number of rows removed; zero is not an error.
pub fn delete_book(conn: &Connection, id: i64) -> CatalogResult<usize> {
    let deleted = conn.execute("DELETE FROM book WHERE id = ?1", params![id])?;
    Ok(deleted)
}

/// Substring match on title using SQLite's default `LIKE` collation, which is
/// case-insensitive for ASCII letters.
pub fn search_books(conn: &Connection, fragment: &str) -> CatalogResult<Vec<Book>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, authorID, qty FROM book
         WHERE title LIKE '%' || ?1 || '%'
         ORDER BY id",
    )?;

    let books = stmt
        .query_map(params![fragment], book_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(books)
}

/// Every book joined to its author. Books whose author row is missing are left
/// out by the inner join.
pub fn fetch_book_listings(conn: &Connection) -> CatalogResult<Vec<BookListing>> {
    let mut stmt = conn.prepare(
        "SELECT book.title, author.name, author.country
         FROM book
         INNER JOIN author ON book.authorID = author.id
         ORDER BY book.id",
    )?;

    let listings = stmt
        .query_map([], |row| {
            Ok(BookListing {
                title: row.get(0)?,
                author_name: row.get(1)?,
                author_country: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(listings)
}

/// Total rows in `book`, orphans included. Logged after start-up so the log
/// shows how large the catalog was when the session began.
pub fn count_books(conn: &Connection) -> CatalogResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0))?;
    Ok(count)
}
