//! Predicate evaluation against ranked rows
//!
//! Exact semantics, no coercion:
//! - Title match is a case-sensitive substring test
//! - Author match is exact equality on first OR last name
//! - Format matches succeed if any linked format type qualifies

use crate::catalog::CatalogStore;
use crate::planner::Predicate;

use super::result::RankedBook;

/// Evaluates predicates against ranked rows
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a row matches all predicates (AND semantics)
    pub fn matches_all<S: CatalogStore>(store: &S, row: &RankedBook, predicates: &[Predicate]) -> bool {
        predicates.iter().all(|p| Self::matches(store, row, p))
    }

    /// Checks if a row matches a single predicate.
    ///
    /// A row whose book or author can no longer be resolved never matches.
    pub fn matches<S: CatalogStore>(store: &S, row: &RankedBook, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::TitleContains(text) => row.title.contains(text.as_str()),
            Predicate::AuthorNameEquals(name) => store
                .book(row.id)
                .and_then(|book| store.author(book.author_id))
                .map(|author| author.name_matches(name))
                .unwrap_or(false),
            Predicate::FormatTypeIs(id) => store
                .format_types_for(row.id)
                .iter()
                .any(|format_type| format_type.id == *id),
            Predicate::PhysicalIs(physical) => store
                .format_types_for(row.id)
                .iter()
                .any(|format_type| format_type.physical == *physical),
        }
    }
}
