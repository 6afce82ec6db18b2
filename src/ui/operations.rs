//! The interactive catalog operations behind each menu entry. Each one opens a
//! single connection from the [`Store`], which is dropped (and closed) on every
//! return path, including early `?` returns.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::db::{
    delete_book as delete_book_row, fetch_author, fetch_book, fetch_book_listings, insert_book,
    search_books as search_book_rows, update_author, update_quantity, update_title, Store,
};
use crate::error::{parse_int, CatalogError, CatalogResult};
use crate::models::Book;

use super::console::Console;

/// Sub-options offered once a book has been found for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateChoice {
    Quantity,
    Title,
    AuthorInfo,
}

impl UpdateChoice {
    /// Map the operator's token to a sub-option. Unknown tokens give `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::Quantity),
            "2" => Some(Self::Title),
            "3" => Some(Self::AuthorInfo),
            _ => None,
        }
    }
}

/// Prompt for a new book and insert it.
pub fn add_book<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> CatalogResult<()> {
    let id = parse_int("book ID", &console.prompt("Enter book ID (4-digit): ")?)?;
    let title = console.prompt("Enter book title: ")?;
    let author_id = parse_int("author ID", &console.prompt("Enter author ID (4-digit): ")?)?;
    let quantity = parse_int("quantity", &console.prompt("Enter quantity: ")?)?;

    let book = Book {
        id,
        title,
        author_id,
        quantity,
    };
    let conn = store.connect()?;
    insert_book(&conn, &book)?;

    info!("event=book_add module=ui status=ok id={}", book.id);
    console.success("Book added successfully.")?;
    Ok(())
}

/// Edit the quantity, title or author of an existing book.
pub fn update_book<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> CatalogResult<()> {
    let id = parse_int("book ID", &console.prompt("Enter book ID to update: ")?)?;
    let conn = store.connect()?;
    let book = fetch_book(&conn, id)?.ok_or(CatalogError::NotFound(id))?;

    console.line(format!(
        "Current title: {}, Author ID: {}, Quantity: {}",
        book.title, book.author_id, book.quantity
    ))?;
    console.line("1. Update quantity\n2. Update title\n3. Update author info")?;
    let token = console.prompt("Choose an option: ")?;

    let Some(choice) = UpdateChoice::parse(&token) else {
        // Unrecognized sub-option: leave the row alone and say nothing.
        debug!(
            "event=book_update module=ui status=skipped id={} choice={:?}",
            id, token
        );
        return Ok(());
    };

    match choice {
        UpdateChoice::Quantity => {
            let quantity = parse_int("quantity", &console.prompt("Enter new quantity: ")?)?;
            update_quantity(&conn, id, quantity)?;
        }
        UpdateChoice::Title => {
            let title = console.prompt("Enter new title: ")?;
            update_title(&conn, id, &title)?;
        }
        UpdateChoice::AuthorInfo => {
            // Look the author up before prompting so an orphan never writes.
            let author = fetch_author(&conn, book.author_id)?.ok_or(
                CatalogError::ReferenceGap {
                    author_id: book.author_id,
                },
            )?;
            console.line(format!(
                "Current author: {}, Country: {}",
                author.name, author.country
            ))?;
            let name = console.prompt("Enter new author name: ")?;
            let country = console.prompt("Enter new author country: ")?;
            update_author(&conn, author.id, &name, &country)?;
        }
    }

    info!(
        "event=book_update module=ui status=ok id={} choice={:?}",
        id, choice
    );
    console.success("Update successful.")?;
    Ok(())
}

/// Delete by id. Missing ids are reported the same way as real deletes.
pub fn delete_book<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> CatalogResult<()> {
    let id = parse_int("book ID", &console.prompt("Enter book ID to delete: ")?)?;
    let conn = store.connect()?;
    let deleted = delete_book_row(&conn, id)?;

    info!(
        "event=book_delete module=ui status=ok id={} rows={}",
        id, deleted
    );
    console.success("Book deleted.")?;
    Ok(())
}

pub fn search_books<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> CatalogResult<()> {
    let fragment = console.prompt("Enter book title to search: ")?;
    let conn = store.connect()?;
    let books = search_book_rows(&conn, &fragment)?;

    info!(
        "event=book_search module=ui status=ok matches={}",
        books.len()
    );
    if books.is_empty() {
        console.line("No books found.")?;
    }
    for book in &books {
        console.line(book)?;
    }
    Ok(())
}

/// List every book with its author's name and country. Orphaned books are not
/// shown; search still finds them.
pub fn view_all_books<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> CatalogResult<()> {
    let conn = store.connect()?;
    let listings = fetch_book_listings(&conn)?;

    info!(
        "event=book_view module=ui status=ok rows={}",
        listings.len()
    );
    for listing in &listings {
        console.line(format!("\n{listing}"))?;
    }
    Ok(())
}
