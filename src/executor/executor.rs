//! Search executor
//!
//! Executes search plans against a catalog store.
//!
//! Execution flow (strict order):
//! 1. Build the ranked base set (reviewed books, rank order)
//! 2. Text lookup: title substring; if that is empty, author name
//! 3. Apply the plan's restriction, if any
//! 4. Apply the plan's projection
//!
//! The fallback decision in step 2 looks at unrestricted title matches only.

use crate::catalog::CatalogStore;
use crate::planner::{Predicate, Projection, SearchPlan};

use super::aggregator::RatingAggregator;
use super::errors::ExecutorResult;
use super::relation::Relation;
use super::result::{ExecutionResult, SearchResults};

/// Outcome of a text lookup
pub struct Lookup<'a, S: CatalogStore> {
    pub relation: Relation<'a, S>,
    pub used_author_fallback: bool,
}

/// Search executor bound to one store
pub struct SearchExecutor<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> SearchExecutor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Executes a search plan.
    ///
    /// Deterministic: same plan + same catalog = same results in the same order.
    pub fn execute(&self, plan: &SearchPlan) -> ExecutorResult<ExecutionResult> {
        let base = self.books_by_rating()?;
        let ranked_count = base.len();

        let lookup = match &plan.lookup {
            Some(query) => self.lookup_in(base, query),
            None => Lookup {
                relation: base,
                used_author_fallback: false,
            },
        };

        let restrictions: Vec<Predicate> = plan.restriction.iter().cloned().collect();
        let relation = lookup.relation.restrict_all(&restrictions);

        let results = match plan.projection {
            Projection::Books => SearchResults::Books(relation.into_rows()),
            Projection::Titles => SearchResults::Titles(relation.titles()),
        };

        Ok(ExecutionResult {
            results,
            ranked_count,
            used_author_fallback: lookup.used_author_fallback,
        })
    }

    /// The ranked base set
    pub fn books_by_rating(&self) -> ExecutorResult<Relation<'a, S>> {
        let rows = RatingAggregator::new(self.store).books_by_rating()?;
        Ok(Relation::new(self.store, rows))
    }

    /// Title matches, or author matches when no title matches
    pub fn query_lookup(&self, query: &str) -> ExecutorResult<Lookup<'a, S>> {
        Ok(self.lookup_in(self.books_by_rating()?, query))
    }

    /// Ranked books whose title contains `query` (case-sensitive)
    pub fn search_by_title(&self, query: &str) -> ExecutorResult<Relation<'a, S>> {
        Ok(self
            .books_by_rating()?
            .restrict(&Predicate::TitleContains(query.to_owned())))
    }

    /// Ranked books whose author's first or last name equals `query`
    pub fn search_by_author_name(&self, query: &str) -> ExecutorResult<Relation<'a, S>> {
        Ok(self
            .books_by_rating()?
            .restrict(&Predicate::AuthorNameEquals(query.to_owned())))
    }

    fn lookup_in(&self, base: Relation<'a, S>, query: &str) -> Lookup<'a, S> {
        let by_title = base
            .clone()
            .restrict(&Predicate::TitleContains(query.to_owned()));
        if !by_title.is_empty() {
            return Lookup {
                relation: by_title,
                used_author_fallback: false,
            };
        }

        Lookup {
            relation: base.restrict(&Predicate::AuthorNameEquals(query.to_owned())),
            used_author_fallback: true,
        }
    }
}
