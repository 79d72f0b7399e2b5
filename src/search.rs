//! Catalog search entry point
//!
//! `BookSearch` is the one operation exposed to callers: plan the request,
//! execute it against the store, log the outcome.

use thiserror::Error;

use crate::catalog::{BookId, CatalogStore};
use crate::executor::{ExecutorError, RankedBook, RatingAggregator, SearchExecutor, SearchResults};
use crate::observability::{log_event_with_fields, Event, Timer};
use crate::planner::{ExplainPlan, PlannerError, QueryPlanner, SearchOptions, SearchPlan};

/// Search failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Option combination rejected before any data was read
    #[error(transparent)]
    InvalidOptions(#[from] PlannerError),

    /// Store could not be read consistently
    #[error(transparent)]
    Execution(#[from] ExecutorError),
}

impl SearchError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidOptions(e) => e.code().code(),
            SearchError::Execution(e) => e.code().code(),
        }
    }

    /// Human-readable message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            SearchError::InvalidOptions(e) => e.message(),
            SearchError::Execution(e) => e.message(),
        }
    }
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Search facade over a catalog store
pub struct BookSearch<'a, S: CatalogStore> {
    store: &'a S,
    planner: QueryPlanner,
    log_searches: bool,
}

impl<'a, S: CatalogStore> BookSearch<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            planner: QueryPlanner::new(),
            log_searches: true,
        }
    }

    /// Enables or disables search event logging
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_searches = enabled;
        self
    }

    /// Searches the catalog.
    ///
    /// - No query, no options: every reviewed book, best rated first
    /// - Query only: title matches, or author matches if no title matches
    /// - Options: the lookup narrowed by format and/or projected to titles
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidOptions` for option combinations with no defined
    /// meaning; `SearchError::Execution` if the store is inconsistent.
    pub fn search(
        &self,
        query: Option<&str>,
        options: Option<&SearchOptions>,
    ) -> SearchResult<SearchResults> {
        let timer = Timer::new();
        let query_field = query.unwrap_or("");

        let plan = match self.planner.plan(query, options) {
            Ok(plan) => plan,
            Err(e) => {
                self.log(
                    Event::SearchRejected,
                    &[("code", e.code().code()), ("query", query_field)],
                );
                return Err(e.into());
            }
        };
        self.log_plan(&plan, query_field);

        let execution = match SearchExecutor::new(self.store).execute(&plan) {
            Ok(execution) => execution,
            Err(e) => {
                self.log(
                    Event::SearchFailed,
                    &[("code", e.code().code()), ("reason", e.message())],
                );
                return Err(e.into());
            }
        };

        if execution.used_author_fallback {
            self.log(Event::SearchFallbackAuthor, &[("query", query_field)]);
        }

        let results = execution.results.len().to_string();
        let ranked = execution.ranked_count.to_string();
        let elapsed = timer.elapsed_us();
        self.log(
            Event::SearchComplete,
            &[
                ("elapsed_us", elapsed.as_str()),
                ("ranked", ranked.as_str()),
                ("results", results.as_str()),
            ],
        );

        Ok(execution.results)
    }

    /// Plans without executing
    pub fn explain(&self, query: Option<&str>, options: Option<&SearchOptions>) -> ExplainPlan {
        match self.planner.plan(query, options) {
            Ok(plan) => ExplainPlan::from_plan(&plan),
            Err(e) => ExplainPlan::from_error(&e),
        }
    }

    /// Every reviewed book, best rated first
    pub fn books_by_rating(&self) -> SearchResult<Vec<RankedBook>> {
        Ok(RatingAggregator::new(self.store).books_by_rating()?)
    }

    /// Average rating of a book, `None` if it has no reviews
    pub fn average_rating(&self, book_id: BookId) -> Option<f64> {
        RatingAggregator::new(self.store).average_rating(book_id)
    }

    fn log_plan(&self, plan: &SearchPlan, query: &str) {
        let restriction = plan
            .restriction
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_default();
        self.log(
            Event::SearchPlanned,
            &[
                ("projection", plan.projection.as_str()),
                ("query", query),
                ("restriction", restriction.as_str()),
                ("shape", plan.shape.as_str()),
            ],
        );
    }

    fn log(&self, event: Event, fields: &[(&str, &str)]) {
        if self.log_searches {
            log_event_with_fields(event, fields);
        }
    }
}
