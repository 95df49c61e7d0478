//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{AlreadyWatchedFilter, DistinctFilter, GenreOverlapFilter};
use crate::profile::UserProfile;
use crate::traits::Filter;
use data_loader::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AlreadyWatchedFilter)
///     .add_filter(GenreOverlapFilter)
///     .add_filter(DistinctFilter);
///
/// let recommended = pipeline.apply(candidates, &profile);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The genre-overlap recommendation pipeline:
    /// drop watched movies, keep genre matches, drop repeats.
    pub fn genre_overlap() -> Self {
        Self::new()
            .add_filter(AlreadyWatchedFilter)
            .add_filter(GenreOverlapFilter)
            .add_filter(DistinctFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each filter sees the output of the previous one. An empty
    /// pipeline returns the candidates unchanged.
    pub fn apply<'m>(&self, candidates: Vec<&'m Movie>, profile: &UserProfile<'_>) -> Vec<&'m Movie> {
        self.filters
            .iter()
            .fold(candidates, |current, filter| filter.apply(current, profile))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::genre_overlap()
    }
}
