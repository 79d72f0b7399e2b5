//! Catalog entity types
//!
//! All entities are owned by the store. Searches only read them.

use serde::{Deserialize, Serialize};

/// Book identifier
pub type BookId = u64;
/// Author identifier
pub type AuthorId = u64;
/// Publisher identifier
pub type PublisherId = u64;
/// Format type identifier
pub type FormatTypeId = u64;

/// A catalog book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    /// Required, non-empty
    pub title: String,
    pub author_id: AuthorId,
    pub publisher_id: PublisherId,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author_id: AuthorId,
        publisher_id: PublisherId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author_id,
            publisher_id,
        }
    }
}

/// A book author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(id: AuthorId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name combining first and last name.
    ///
    /// Either part may be empty; the result never carries stray whitespace.
    pub fn format_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Exact match against either name part
    pub fn name_matches(&self, name: &str) -> bool {
        self.first_name == name || self.last_name == name
    }
}

/// A book publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: String,
}

/// A single review of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReview {
    pub id: u64,
    pub book_id: BookId,
    pub rating: i32,
}

/// Format classification (hardcover, ebook, audiobook...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFormatType {
    pub id: FormatTypeId,
    pub name: String,
    pub physical: bool,
}

/// Link between a book and one of its format types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFormat {
    pub id: u64,
    pub book_id: BookId,
    pub book_format_type_id: FormatTypeId,
}

/// Serialized form of a whole catalog.
///
/// Missing collections deserialize as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub publishers: Vec<Publisher>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub book_reviews: Vec<BookReview>,
    #[serde(default)]
    pub book_format_types: Vec<BookFormatType>,
    #[serde(default)]
    pub book_formats: Vec<BookFormat>,
}
