//! Filter to drop repeated candidates.

use crate::profile::UserProfile;
use crate::traits::Filter;
use data_loader::Movie;
use std::collections::HashSet;

/// Keeps the first candidate for each movie id and drops the rest.
pub struct DistinctFilter;

impl Filter for DistinctFilter {
    fn name(&self) -> &str {
        "DistinctFilter"
    }

    fn apply<'m>(&self, candidates: Vec<&'m Movie>, _profile: &UserProfile<'_>) -> Vec<&'m Movie> {
        let mut selected = HashSet::new();
        candidates
            .into_iter()
            .filter(|movie| selected.insert(movie.id.as_str()))
            .collect()
    }
}
