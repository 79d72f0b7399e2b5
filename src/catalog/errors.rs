//! Catalog loading and validation errors

use thiserror::Error;

use super::types::{AuthorId, BookId, FormatTypeId, PublisherId};

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    // Entity validation
    #[error("Book {0} has an empty title")]
    EmptyTitle(BookId),

    #[error("Book {0} title exceeds {1} characters")]
    TitleTooLong(BookId, usize),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },

    // Referential integrity
    #[error("Book {book} references unknown author {author}")]
    UnknownAuthor { book: BookId, author: AuthorId },

    #[error("Book {book} references unknown publisher {publisher}")]
    UnknownPublisher { book: BookId, publisher: PublisherId },

    #[error("Review {review} references unknown book {book}")]
    ReviewForUnknownBook { review: u64, book: BookId },

    #[error("Book format {format} references unknown book {book}")]
    FormatForUnknownBook { format: u64, book: BookId },

    #[error("Book format {format} references unknown format type {format_type}")]
    UnknownFormatType {
        format: u64,
        format_type: FormatTypeId,
    },

    // Loading
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid catalog JSON: {0}")]
    InvalidJson(String),
}

impl CatalogError {
    /// Stable error code for CLI responses
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::EmptyTitle(_)
            | CatalogError::TitleTooLong(_, _)
            | CatalogError::DuplicateId { .. } => "CATALOG_VALIDATION_FAILED",
            CatalogError::UnknownAuthor { .. }
            | CatalogError::UnknownPublisher { .. }
            | CatalogError::ReviewForUnknownBook { .. }
            | CatalogError::FormatForUnknownBook { .. }
            | CatalogError::UnknownFormatType { .. } => "CATALOG_DANGLING_REFERENCE",
            CatalogError::Io(_) => "CATALOG_IO_ERROR",
            CatalogError::InvalidJson(_) => "CATALOG_INVALID_JSON",
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidJson(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::EmptyTitle(1).code(), "CATALOG_VALIDATION_FAILED");
        assert_eq!(
            CatalogError::UnknownAuthor { book: 1, author: 9 }.code(),
            "CATALOG_DANGLING_REFERENCE"
        );
        assert_eq!(CatalogError::Io("x".into()).code(), "CATALOG_IO_ERROR");
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::UnknownFormatType {
            format: 4,
            format_type: 7,
        };
        let display = err.to_string();
        assert!(display.contains("format 4"));
        assert!(display.contains("format type 7"));
    }
}
