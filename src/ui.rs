//! Line-based console front end: the prompt helpers, the catalog operations
//! and the menu loop that ties them together.

mod console;
mod menu;
mod operations;

pub use console::Console;
pub use menu::{run_menu, MenuChoice};
pub use operations::{
    add_book, delete_book, search_books, update_book, view_all_books, UpdateChoice,
};
