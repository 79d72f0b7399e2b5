//! Search request structures
//!
//! Defines the caller-facing options and the predicates a plan is built from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::FormatTypeId;

/// Filter options accepted by a search.
///
/// Unrecognized keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Project results down to titles (set only when true)
    #[serde(default)]
    pub title_only: bool,
    /// Restrict to books available in this format type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_format_type_id: Option<FormatTypeId>,
    /// Restrict to books available in a physical (true) or digital (false) format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_format_physical: Option<bool>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_only(mut self) -> Self {
        self.title_only = true;
        self
    }

    pub fn with_format_type(mut self, id: FormatTypeId) -> Self {
        self.book_format_type_id = Some(id);
        self
    }

    pub fn with_physical(mut self, physical: bool) -> Self {
        self.book_format_physical = Some(physical);
        self
    }

    /// Number of recognized keys that are set
    pub fn set_count(&self) -> usize {
        [
            self.title_only,
            self.book_format_type_id.is_some(),
            self.book_format_physical.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// A single restriction over the ranked base set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Title contains the text (case-sensitive substring)
    TitleContains(String),
    /// Author first name OR last name equals the text
    AuthorNameEquals(String),
    /// Book is linked to this format type
    FormatTypeIs(FormatTypeId),
    /// Book is linked to a format type with this physical flag
    PhysicalIs(bool),
}

impl Predicate {
    /// Returns the predicate name for explain output
    pub fn op_name(&self) -> &'static str {
        match self {
            Predicate::TitleContains(_) => "title_contains",
            Predicate::AuthorNameEquals(_) => "author_name_eq",
            Predicate::FormatTypeIs(_) => "format_type_eq",
            Predicate::PhysicalIs(_) => "physical_eq",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::TitleContains(q) | Predicate::AuthorNameEquals(q) => {
                write!(f, "{} {:?}", self.op_name(), q)
            }
            Predicate::FormatTypeIs(id) => write!(f, "{} {}", self.op_name(), id),
            Predicate::PhysicalIs(b) => write!(f, "{} {}", self.op_name(), b),
        }
    }
}

/// What each result row is reduced to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Full ranked book rows
    Books,
    /// Titles only, order preserved
    Titles,
}

impl Projection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Books => "BOOKS",
            Projection::Titles => "TITLES",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_count() {
        assert_eq!(SearchOptions::new().set_count(), 0);
        assert_eq!(SearchOptions::new().with_title_only().set_count(), 1);
        assert_eq!(
            SearchOptions::new()
                .with_title_only()
                .with_physical(false)
                .set_count(),
            2
        );
        assert_eq!(
            SearchOptions::new()
                .with_title_only()
                .with_format_type(1)
                .with_physical(true)
                .set_count(),
            3
        );
    }

    #[test]
    fn test_false_title_only_is_not_set() {
        let options: SearchOptions = serde_json::from_value(json!({"title_only": false})).unwrap();
        assert_eq!(options.set_count(), 0);
    }

    #[test]
    fn test_physical_false_is_set() {
        let options: SearchOptions =
            serde_json::from_value(json!({"book_format_physical": false})).unwrap();
        assert_eq!(options.book_format_physical, Some(false));
        assert_eq!(options.set_count(), 1);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let options: SearchOptions = serde_json::from_value(json!({
            "book_format_type_id": 3,
            "sort": "title",
            "page": 2
        }))
        .unwrap();
        assert_eq!(options, SearchOptions::new().with_format_type(3));
    }

    #[test]
    fn test_predicate_display() {
        assert_eq!(
            Predicate::TitleContains("Dune".into()).to_string(),
            "title_contains \"Dune\""
        );
        assert_eq!(Predicate::FormatTypeIs(3).to_string(), "format_type_eq 3");
        assert_eq!(Predicate::PhysicalIs(false).to_string(), "physical_eq false");
    }
}
