//! Rating aggregation
//!
//! Builds the ranked base set: every book with at least one review, one row
//! per book, ordered by mean rating descending (book id breaks ties).
//! Books without reviews are excluded, as with an inner join on reviews.

use crate::catalog::{Book, BookId, CatalogStore};

use super::errors::{ExecutorError, ExecutorResult};
use super::result::RankedBook;
use super::sorter::RankSorter;

/// Mean of `ratings` rounded to one decimal place, or `None` if empty
pub fn mean_rating(ratings: &[i32]) -> Option<f64> {
    unrounded_mean(ratings).map(round_one_decimal)
}

fn unrounded_mean(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    Some(sum as f64 / ratings.len() as f64)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes ratings and the ranked base set over a store
pub struct RatingAggregator<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> RatingAggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Average rating of one book, rounded to one decimal place.
    ///
    /// Returns `None` for unknown books and books without reviews.
    pub fn average_rating(&self, book_id: BookId) -> Option<f64> {
        let ratings = self.ratings(book_id);
        mean_rating(&ratings)
    }

    /// All reviewed books in rank order
    pub fn books_by_rating(&self) -> ExecutorResult<Vec<RankedBook>> {
        let mut rows = Vec::new();

        for book in self.store.books() {
            let ratings = self.ratings(book.id);
            let Some(mean) = unrounded_mean(&ratings) else {
                continue;
            };
            rows.push(self.ranked_row(book, mean, ratings.len())?);
        }

        RankSorter::sort(&mut rows);
        Ok(rows)
    }

    fn ratings(&self, book_id: BookId) -> Vec<i32> {
        self.store
            .reviews_for(book_id)
            .iter()
            .map(|review| review.rating)
            .collect()
    }

    fn ranked_row(&self, book: &Book, mean: f64, review_count: usize) -> ExecutorResult<RankedBook> {
        let author = self
            .store
            .author(book.author_id)
            .ok_or_else(|| ExecutorError::missing_reference(book.id, "author", book.author_id))?;
        let publisher = self.store.publisher(book.publisher_id).ok_or_else(|| {
            ExecutorError::missing_reference(book.id, "publisher", book.publisher_id)
        })?;

        Ok(RankedBook {
            id: book.id,
            title: book.title.clone(),
            author_name: author.format_name(),
            publisher_name: publisher.name.clone(),
            average_rating: round_one_decimal(mean),
            review_count,
            mean_rating: mean,
        })
    }
}
