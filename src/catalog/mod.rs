//! Catalog subsystem
//!
//! Holds the entities searched by the planner and executor:
//! books, authors, publishers, reviews, and format types.
//!
//! # Design Principles
//!
//! - Read-only: searches never create, mutate, or delete entities
//! - Validated once: a catalog is checked when it is built, never afterwards
//! - Deterministic iteration: books are always yielded in id order

mod errors;
mod store;
mod types;
mod validator;

pub use errors::{CatalogError, CatalogResult};
pub use store::{CatalogStore, MemoryCatalog};
pub use types::{
    Author, AuthorId, Book, BookFormat, BookFormatType, BookId, BookReview, CatalogSnapshot,
    FormatTypeId, Publisher, PublisherId,
};
pub use validator::{CatalogValidator, DEFAULT_MAX_TITLE_LENGTH};
