use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::db::Store;
use crate::error::CatalogError;

use super::console::Console;
use super::operations::{add_book, delete_book, search_books, update_book, view_all_books};

const MENU_TEXT: &str = "\n1. Enter book\n2. Update book\n3. Delete book\n4. Search books\n5. View details of all books\n0. Exit";

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    UpdateBook,
    DeleteBook,
    SearchBooks,
    ViewAllBooks,
    Exit,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::UpdateBook),
            "3" => Some(Self::DeleteBook),
            "4" => Some(Self::SearchBooks),
            "5" => Some(Self::ViewAllBooks),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Show the menu and dispatch choices until the operator exits or input ends.
///
/// Operation failures are printed and the loop carries on; only a broken
/// console makes this return an error.
pub fn run_menu<R: BufRead, W: Write>(store: &Store, console: &mut Console<R, W>) -> Result<()> {
    loop {
        console.line(MENU_TEXT).context("failed to print menu")?;
        let token = console
            .read_line("Select an option: ")
            .context("failed to read menu choice")?;

        let choice = match token {
            // Closed stdin behaves like choosing Exit.
            None => MenuChoice::Exit,
            Some(token) => match MenuChoice::parse(&token) {
                Some(choice) => choice,
                None => {
                    info!("event=menu_invalid module=ui status=ok token={:?}", token);
                    console
                        .line("Invalid option. Try again.")
                        .context("failed to print menu feedback")?;
                    continue;
                }
            },
        };

        let outcome = match choice {
            MenuChoice::AddBook => add_book(store, console),
            MenuChoice::UpdateBook => update_book(store, console),
            MenuChoice::DeleteBook => delete_book(store, console),
            MenuChoice::SearchBooks => search_books(store, console),
            MenuChoice::ViewAllBooks => view_all_books(store, console),
            MenuChoice::Exit => {
                console.line("Goodbye!").context("failed to print farewell")?;
                return Ok(());
            }
        };

        match outcome {
            Ok(()) => {}
            // A missing book is an expected answer, shown without the error prefix.
            Err(err @ CatalogError::NotFound(_)) => {
                info!(
                    "event=operation_not_found module=ui status=ok choice={:?} error_code={}",
                    choice,
                    err.code()
                );
                console
                    .line(&err)
                    .context("failed to print operation result")?;
            }
            Err(err) => {
                warn!(
                    "event=operation_error module=ui status=error choice={:?} error_code={} error={}",
                    choice,
                    err.code(),
                    err
                );
                console
                    .error(&err)
                    .context("failed to print operation error")?;
            }
        }
    }
}
