//! Result types for search execution

use serde::Serialize;

use crate::catalog::BookId;

/// One row of the ranked base set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBook {
    pub id: BookId,
    pub title: String,
    pub author_name: String,
    pub publisher_name: String,
    /// Mean rating rounded to one decimal place
    pub average_rating: f64,
    pub review_count: usize,
    /// Unrounded mean, used for ordering
    #[serde(skip)]
    pub(crate) mean_rating: f64,
}

/// Search output: full rows, or titles only
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResults {
    Books(Vec<RankedBook>),
    Titles(Vec<String>),
}

impl SearchResults {
    /// Returns true if nothing matched
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of results
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Books(books) => books.len(),
            SearchResults::Titles(titles) => titles.len(),
        }
    }

    /// Titles in result order, for either variant
    pub fn titles(&self) -> Vec<&str> {
        match self {
            SearchResults::Books(books) => books.iter().map(|b| b.title.as_str()).collect(),
            SearchResults::Titles(titles) => titles.iter().map(String::as_str).collect(),
        }
    }

    /// Full rows, if this result was not projected
    pub fn books(&self) -> Option<&[RankedBook]> {
        match self {
            SearchResults::Books(books) => Some(books),
            SearchResults::Titles(_) => None,
        }
    }
}

/// Result of executing a search plan
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    /// Projected results in rank order
    pub results: SearchResults,
    /// Size of the ranked base set the search started from
    pub ranked_count: usize,
    /// Whether the author-name fallback produced the lookup result
    pub used_author_fallback: bool,
}
