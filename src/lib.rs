//! bookcatalog - ranked search over a book catalog
//!
//! Books are ranked by average review rating, looked up by title (falling
//! back to author name), optionally narrowed by format, and optionally
//! projected down to titles.

pub mod catalog;
pub mod cli;
pub mod executor;
pub mod observability;
pub mod planner;
pub mod search;

pub use search::{BookSearch, SearchError, SearchResult};
