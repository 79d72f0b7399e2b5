//! Search planner
//!
//! Turns `(query, options)` into an immutable `SearchPlan`.
//!
//! Decision order (first match wins):
//! 1. No query and no options: the full ranked catalog
//! 2. No options: text lookup only
//! 3. Two recognized options: `title_only` paired with one restriction
//! 4. Otherwise: exactly one recognized option
//!
//! Planning never reads the catalog.

use super::ast::{Predicate, Projection, SearchOptions};
use super::errors::{PlannerError, PlannerResult};

/// Which branch of the decision tree produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanShape {
    /// Whole ranked catalog, nothing applied
    RankedCatalog,
    /// Text lookup with no options
    Lookup,
    /// Text lookup plus one option
    SingleOption,
    /// Text lookup plus a restriction, projected to titles
    TwoOptions,
}

impl PlanShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanShape::RankedCatalog => "RANKED_CATALOG",
            PlanShape::Lookup => "LOOKUP",
            PlanShape::SingleOption => "SINGLE_OPTION",
            PlanShape::TwoOptions => "TWO_OPTIONS",
        }
    }
}

/// Immutable search plan (no runtime state)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    /// Decision branch taken
    pub shape: PlanShape,
    /// Lookup text; `None` means the ranked base set is the lookup result
    pub lookup: Option<String>,
    /// At most one format restriction, applied after the lookup
    pub restriction: Option<Predicate>,
    /// Final projection
    pub projection: Projection,
}

impl SearchPlan {
    fn new(shape: PlanShape, lookup: Option<&str>) -> Self {
        Self {
            shape,
            lookup: lookup.map(str::to_owned),
            restriction: None,
            projection: Projection::Books,
        }
    }

    fn restricted_by(mut self, predicate: Predicate) -> Self {
        self.restriction = Some(predicate);
        self
    }

    fn titles_only(mut self) -> Self {
        self.projection = Projection::Titles;
        self
    }

    /// Primary lookup predicate (title substring)
    pub fn title_predicate(&self) -> Option<Predicate> {
        self.lookup.clone().map(Predicate::TitleContains)
    }

    /// Fallback lookup predicate (author name), used only when
    /// the title predicate matches nothing
    pub fn author_predicate(&self) -> Option<Predicate> {
        self.lookup.clone().map(Predicate::AuthorNameEquals)
    }
}

/// Search planner; stateless, so the same inputs always yield the same plan
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPlanner;

impl QueryPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Plans a search, returning an immutable plan or an invalid-options error.
    pub fn plan(
        &self,
        query: Option<&str>,
        options: Option<&SearchOptions>,
    ) -> PlannerResult<SearchPlan> {
        match (query, options) {
            (None, None) => Ok(SearchPlan::new(PlanShape::RankedCatalog, None)),
            (Some(q), None) => Ok(SearchPlan::new(PlanShape::Lookup, Some(q))),
            (q, Some(opts)) if opts.set_count() == 2 => self.two_options(q, opts),
            (q, Some(opts)) => self.single_option(q, opts),
        }
    }

    fn single_option(&self, query: Option<&str>, options: &SearchOptions) -> PlannerResult<SearchPlan> {
        if options.set_count() > 2 {
            return Err(PlannerError::options_ambiguous(
                "title_only, book_format_type_id and book_format_physical cannot all be set",
            ));
        }

        let plan = SearchPlan::new(PlanShape::SingleOption, query);

        if options.title_only {
            Ok(plan.titles_only())
        } else if let Some(id) = options.book_format_type_id {
            Ok(plan.restricted_by(Predicate::FormatTypeIs(id)))
        } else if let Some(physical) = options.book_format_physical {
            Ok(plan.restricted_by(Predicate::PhysicalIs(physical)))
        } else {
            Err(PlannerError::options_missing())
        }
    }

    fn two_options(&self, query: Option<&str>, options: &SearchOptions) -> PlannerResult<SearchPlan> {
        let plan = SearchPlan::new(PlanShape::TwoOptions, query);

        match (options.book_format_type_id, options.book_format_physical) {
            (None, Some(physical)) => Ok(plan
                .restricted_by(Predicate::PhysicalIs(physical))
                .titles_only()),
            (Some(id), None) => Ok(plan.restricted_by(Predicate::FormatTypeIs(id)).titles_only()),
            _ => Err(PlannerError::options_ambiguous(
                "book_format_type_id and book_format_physical cannot be combined",
            )),
        }
    }
}
