//! Construction-time catalog validation
//!
//! Validation runs once, before a `MemoryCatalog` is built:
//! - Titles are present and bounded
//! - Ids are unique per entity kind
//! - Every reference points at an existing entity
//!
//! Validation does not mutate the snapshot and is deterministic: entities
//! are checked in snapshot order and the first violation is reported.

use std::collections::HashSet;

use super::errors::{CatalogError, CatalogResult};
use super::types::CatalogSnapshot;

/// Default upper bound on title length (in characters)
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 512;

/// Validates catalog snapshots
pub struct CatalogValidator {
    max_title_length: usize,
}

impl CatalogValidator {
    pub fn new(max_title_length: usize) -> Self {
        Self { max_title_length }
    }

    /// Validates the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found, checking entities in this order:
    /// authors, publishers, format types, books, reviews, book formats.
    pub fn validate(&self, snapshot: &CatalogSnapshot) -> CatalogResult<()> {
        let authors = unique_ids("author", snapshot.authors.iter().map(|a| a.id))?;
        let publishers = unique_ids("publisher", snapshot.publishers.iter().map(|p| p.id))?;
        let format_types = unique_ids(
            "book_format_type",
            snapshot.book_format_types.iter().map(|t| t.id),
        )?;
        let books = unique_ids("book", snapshot.books.iter().map(|b| b.id))?;
        unique_ids("book_review", snapshot.book_reviews.iter().map(|r| r.id))?;
        unique_ids("book_format", snapshot.book_formats.iter().map(|f| f.id))?;

        for book in &snapshot.books {
            if book.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(book.id));
            }
            if book.title.chars().count() > self.max_title_length {
                return Err(CatalogError::TitleTooLong(book.id, self.max_title_length));
            }
            if !authors.contains(&book.author_id) {
                return Err(CatalogError::UnknownAuthor {
                    book: book.id,
                    author: book.author_id,
                });
            }
            if !publishers.contains(&book.publisher_id) {
                return Err(CatalogError::UnknownPublisher {
                    book: book.id,
                    publisher: book.publisher_id,
                });
            }
        }

        for review in &snapshot.book_reviews {
            if !books.contains(&review.book_id) {
                return Err(CatalogError::ReviewForUnknownBook {
                    review: review.id,
                    book: review.book_id,
                });
            }
        }

        for format in &snapshot.book_formats {
            if !books.contains(&format.book_id) {
                return Err(CatalogError::FormatForUnknownBook {
                    format: format.id,
                    book: format.book_id,
                });
            }
            if !format_types.contains(&format.book_format_type_id) {
                return Err(CatalogError::UnknownFormatType {
                    format: format.id,
                    format_type: format.book_format_type_id,
                });
            }
        }

        Ok(())
    }
}

impl Default for CatalogValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TITLE_LENGTH)
    }
}

fn unique_ids(kind: &'static str, ids: impl Iterator<Item = u64>) -> CatalogResult<HashSet<u64>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Author, Book, BookFormat, BookReview, Publisher};

    fn valid_snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            authors: vec![Author::new(1, "Jane", "Austen")],
            publishers: vec![Publisher {
                id: 1,
                name: "Egerton".into(),
            }],
            books: vec![Book::new(1, "Emma", 1, 1)],
            book_reviews: vec![BookReview {
                id: 1,
                book_id: 1,
                rating: 5,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_snapshot_passes() {
        assert!(CatalogValidator::default().validate(&valid_snapshot()).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.books[0].title = "   ".into();

        let err = CatalogValidator::default().validate(&snapshot).unwrap_err();
        assert_eq!(err, CatalogError::EmptyTitle(1));
    }

    #[test]
    fn test_long_title_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.books[0].title = "x".repeat(11);

        let err = CatalogValidator::new(10).validate(&snapshot).unwrap_err();
        assert_eq!(err, CatalogError::TitleTooLong(1, 10));
    }

    #[test]
    fn test_duplicate_book_id_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.books.push(Book::new(1, "Persuasion", 1, 1));

        let err = CatalogValidator::default().validate(&snapshot).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { kind: "book", id: 1 });
    }

    #[test]
    fn test_unknown_author_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.books[0].author_id = 42;

        let err = CatalogValidator::default().validate(&snapshot).unwrap_err();
        assert_eq!(err, CatalogError::UnknownAuthor { book: 1, author: 42 });
    }

    #[test]
    fn test_unknown_publisher_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.books[0].publisher_id = 3;

        let err = CatalogValidator::default().validate(&snapshot).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownPublisher {
                book: 1,
                publisher: 3
            }
        );
    }

    #[test]
    fn test_orphan_review_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.book_reviews[0].book_id = 99;

        let err = CatalogValidator::default().validate(&snapshot).unwrap_err();
        assert_eq!(err, CatalogError::ReviewForUnknownBook { review: 1, book: 99 });
    }

    #[test]
    fn test_format_with_unknown_type_rejected() {
        let mut snapshot = valid_snapshot();
        snapshot.book_formats.push(BookFormat {
            id: 1,
            book_id: 1,
            book_format_type_id: 5,
        });

        let err = CatalogValidator::default().validate(&snapshot).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownFormatType {
                format: 1,
                format_type: 5
            }
        );
    }
}
