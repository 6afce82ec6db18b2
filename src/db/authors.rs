use rusqlite::{params, Connection, OptionalExtension};

use crate::error::CatalogResult;
use crate::models::Author;

/// Look up an author by id. Books may point at ids that have no row, so
/// callers must handle `None` rather than assume the reference holds.
pub fn fetch_author(conn: &Connection, id: i64) -> CatalogResult<Option<Author>> {
    let author = conn
        .query_row(
            "SELECT id, name, country FROM author WHERE id = ?1",
            params![id],
            |row| {
                Ok(Author {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    country: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(author)
}

/// Overwrite both editable author fields in one statement.
pub fn update_author(
    conn: &Connection,
    id: i64,
    name: &str,
    country: &str,
) -> CatalogResult<usize> {
    let updated = conn.execute(
        "UPDATE author SET name = ?1, country = ?2 WHERE id = ?3",
        params![name, country, id],
    )?;
    Ok(updated)
}

/// Total rows in `author`, logged next to the book count at start-up.
pub fn count_authors(conn: &Connection) -> CatalogResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM author", [], |row| row.get(0))?;
    Ok(count)
}
