//! Core library surface for the shelf-track bookstore inventory manager.
//!
//! The binary only wires these pieces together; tests drive the same API with
//! temporary database files and scripted console input.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

/// Storage handle and the one-time initializer run before the menu starts.
pub use db::{initialize, Store};

pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use models::{Author, Book, BookListing};

/// The interactive entry point and its console abstraction.
pub use ui::{run_menu, Console};
