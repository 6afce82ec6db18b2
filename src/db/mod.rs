//! Persistence module split across logical submodules.

mod authors;
mod books;
mod connection;

pub use authors::{count_authors, fetch_author, update_author};
pub use books::{
    count_books, delete_book, fetch_book, fetch_book_listings, insert_book, search_books,
    update_quantity, update_title,
};
pub use connection::{create_tables, initialize, populate_initial_data, Store};
