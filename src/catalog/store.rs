//! Read-only catalog store
//!
//! `CatalogStore` is the seam between the search core and whatever holds the
//! catalog. `MemoryCatalog` is the bundled implementation, built from a
//! validated `CatalogSnapshot`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::observability::{log_event_with_fields, Event, ObservationScope};

use super::errors::CatalogResult;
use super::types::{
    Author, AuthorId, Book, BookFormatType, BookId, BookReview, CatalogSnapshot, FormatTypeId,
    Publisher, PublisherId,
};
use super::validator::CatalogValidator;

/// Read access to catalog entities
pub trait CatalogStore {
    /// All books in ascending id order
    fn books(&self) -> Vec<&Book>;

    /// Look up a book by id
    fn book(&self, id: BookId) -> Option<&Book>;

    /// Look up an author by id
    fn author(&self, id: AuthorId) -> Option<&Author>;

    /// Look up a publisher by id
    fn publisher(&self, id: PublisherId) -> Option<&Publisher>;

    /// Reviews of a book (empty if none)
    fn reviews_for(&self, book: BookId) -> Vec<&BookReview>;

    /// Format types linked to a book through its book formats
    fn format_types_for(&self, book: BookId) -> Vec<&BookFormatType>;
}

/// In-memory catalog store
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    books: BTreeMap<BookId, Book>,
    authors: HashMap<AuthorId, Author>,
    publishers: HashMap<PublisherId, Publisher>,
    format_types: HashMap<FormatTypeId, BookFormatType>,
    reviews: HashMap<BookId, Vec<BookReview>>,
    formats: HashMap<BookId, Vec<FormatTypeId>>,
}

impl MemoryCatalog {
    /// Builds a catalog from a snapshot using default validation
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> CatalogResult<Self> {
        Self::from_snapshot_with(snapshot, &CatalogValidator::default())
    }

    /// Builds a catalog from a snapshot, validating it first.
    ///
    /// No partially-built catalog is ever returned.
    pub fn from_snapshot_with(
        snapshot: CatalogSnapshot,
        validator: &CatalogValidator,
    ) -> CatalogResult<Self> {
        validator.validate(&snapshot)?;

        let mut catalog = MemoryCatalog::default();

        for author in snapshot.authors {
            catalog.authors.insert(author.id, author);
        }
        for publisher in snapshot.publishers {
            catalog.publishers.insert(publisher.id, publisher);
        }
        for format_type in snapshot.book_format_types {
            catalog.format_types.insert(format_type.id, format_type);
        }
        for book in snapshot.books {
            catalog.books.insert(book.id, book);
        }
        for review in snapshot.book_reviews {
            catalog.reviews.entry(review.book_id).or_default().push(review);
        }
        for format in snapshot.book_formats {
            catalog
                .formats
                .entry(format.book_id)
                .or_default()
                .push(format.book_format_type_id);
        }

        Ok(catalog)
    }

    /// Loads and validates a JSON catalog snapshot from disk
    pub fn load(path: &Path, validator: &CatalogValidator) -> CatalogResult<Self> {
        let path_str = path.display().to_string();
        let scope = ObservationScope::with_fields("CATALOG_LOAD", &[("path", path_str.as_str())]);

        let result = Self::read_snapshot(path)
            .and_then(|snapshot| Self::from_snapshot_with(snapshot, validator));

        match result {
            Ok(catalog) => {
                scope.complete();
                let books = catalog.book_count().to_string();
                let reviews = catalog.review_count().to_string();
                log_event_with_fields(
                    Event::CatalogLoaded,
                    &[("books", books.as_str()), ("reviews", reviews.as_str())],
                );
                Ok(catalog)
            }
            Err(e) => {
                scope.fail(&e.to_string());
                Err(e)
            }
        }
    }

    fn read_snapshot(path: &Path) -> CatalogResult<CatalogSnapshot> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.values().map(Vec::len).sum()
    }
}

impl CatalogStore for MemoryCatalog {
    fn books(&self) -> Vec<&Book> {
        self.books.values().collect()
    }

    fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    fn publisher(&self, id: PublisherId) -> Option<&Publisher> {
        self.publishers.get(&id)
    }

    fn reviews_for(&self, book: BookId) -> Vec<&BookReview> {
        self.reviews
            .get(&book)
            .map(|reviews| reviews.iter().collect())
            .unwrap_or_default()
    }

    fn format_types_for(&self, book: BookId) -> Vec<&BookFormatType> {
        self.formats
            .get(&book)
            .map(|ids| ids.iter().filter_map(|id| self.format_types.get(id)).collect())
            .unwrap_or_default()
    }
}
