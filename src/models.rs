//! Domain models that mirror the SQLite schema. They stay plain data holders so
//! the persistence layer and the console menu can pass them around freely.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalog entry in the `book` table.
pub struct Book {
    /// Operator-supplied primary key. Intended to be four digits, but nothing
    /// enforces that.
    pub id: i64,
    pub title: String,
    /// Reference to `author.id`. The schema has no foreign key, so the author
    /// may be missing.
    pub author_id: i64,
    /// Copies on hand.
    pub quantity: i64,
}

impl fmt::Display for Book {
    /// Single-line form printed by the search results.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author ID: {}, Quantity: {}",
            self.id, self.title, self.author_id, self.quantity
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A writer in the `author` table.
pub struct Author {
    pub id: i64,
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the book/author join shown by "View details of all books".
pub struct BookListing {
    pub title: String,
    pub author_name: String,
    pub author_country: String,
}

impl fmt::Display for BookListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nAuthor's Name: {}\nAuthor's Country: {}",
            self.title, self.author_name, self.author_country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_display_matches_search_line() {
        let book = Book {
            id: 3001,
            title: "A Tale of Two Cities".to_string(),
            author_id: 1290,
            quantity: 30,
        };
        assert_eq!(
            book.to_string(),
            "ID: 3001, Title: A Tale of Two Cities, Author ID: 1290, Quantity: 30"
        );
    }

    #[test]
    fn listing_display_spans_three_lines() {
        let listing = BookListing {
            title: "The Lord of the Rings".to_string(),
            author_name: "J.R.R. Tolkien".to_string(),
            author_country: "South Africa".to_string(),
        };
        assert_eq!(listing.to_string().lines().count(), 3);
        assert!(listing.to_string().ends_with("Author's Country: South Africa"));
    }
}
