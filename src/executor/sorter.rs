//! Rank ordering for the ranked base set
//!
//! Mean rating descending, then book id ascending. The id tiebreak keeps
//! the order total, so results are reproducible across runs.

use std::cmp::Ordering;

use super::result::RankedBook;

/// Sorts ranked rows
pub struct RankSorter;

impl RankSorter {
    /// Sorts rows into rank order
    pub fn sort(rows: &mut [RankedBook]) {
        rows.sort_by(Self::compare);
    }

    /// Rank comparison; the unrounded mean decides, not the displayed rating
    pub fn compare(a: &RankedBook, b: &RankedBook) -> Ordering {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Returns true if rows are in rank order
    pub fn is_sorted(rows: &[RankedBook]) -> bool {
        rows.windows(2)
            .all(|pair| Self::compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}
