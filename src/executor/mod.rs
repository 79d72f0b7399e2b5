//! Search executor subsystem
//!
//! Consumes search plans and produces ranked, deterministic results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Aggregate ratings into the ranked base set
//! 2. Apply the text lookup with author fallback
//! 3. Apply the restriction predicate
//! 4. Apply the projection
//!
//! # Invariants
//!
//! - Unreviewed books never appear in results
//! - Results are ordered by mean rating descending, then book id
//! - Restrictions and projections never reorder rows

mod aggregator;
mod errors;
mod executor;
mod filters;
mod relation;
mod result;
mod sorter;

pub use aggregator::{mean_rating, RatingAggregator};
pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult};
pub use executor::{Lookup, SearchExecutor};
pub use filters::PredicateFilter;
pub use relation::Relation;
pub use result::{ExecutionResult, RankedBook, SearchResults};
pub use sorter::RankSorter;
