//! Ordered relation over ranked rows
//!
//! A `Relation` is a snapshot of ranked rows bound to the store it came from.
//! Restrictions only ever remove rows, so rank order survives every step.

use std::slice;

use crate::catalog::CatalogStore;
use crate::planner::Predicate;

use super::filters::PredicateFilter;
use super::result::RankedBook;

/// Ranked rows plus the store used to evaluate predicates on them
pub struct Relation<'a, S: CatalogStore> {
    store: &'a S,
    rows: Vec<RankedBook>,
}

impl<S: CatalogStore> Clone for Relation<'_, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            rows: self.rows.clone(),
        }
    }
}

impl<'a, S: CatalogStore> Relation<'a, S> {
    /// Wraps rows that are already in rank order
    pub fn new(store: &'a S, rows: Vec<RankedBook>) -> Self {
        Self { store, rows }
    }

    /// Keeps only rows matching the predicate
    pub fn restrict(self, predicate: &Predicate) -> Self {
        self.restrict_all(slice::from_ref(predicate))
    }

    /// Keeps only rows matching every predicate
    pub fn restrict_all(self, predicates: &[Predicate]) -> Self {
        let store = self.store;
        let rows = self
            .rows
            .into_iter()
            .filter(|row| PredicateFilter::matches_all(store, row, predicates))
            .collect();
        Self { store, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[RankedBook] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<RankedBook> {
        self.rows
    }

    /// Projects to titles, keeping rank order and duplicates
    pub fn titles(self) -> Vec<String> {
        self.rows.into_iter().map(|row| row.title).collect()
    }
}
