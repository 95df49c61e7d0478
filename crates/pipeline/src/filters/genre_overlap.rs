//! Filter to keep only movies sharing a genre with the user's history.
//!
//! Relevance is binary: a movie either shares at least one genre with
//! something the user watched or it is dropped. There is no scoring.

use crate::profile::UserProfile;
use crate::traits::Filter;
use data_loader::Movie;

/// Keeps only candidates with at least one genre in the user's profile.
///
/// ## Algorithm
/// 1. Take the aggregated genres from UserProfile
/// 2. For each candidate, check if any of its genres is among them
/// 3. Keep movies with genre overlap
///
/// A profile without genres keeps nothing.
pub struct GenreOverlapFilter;

impl Filter for GenreOverlapFilter {
    fn name(&self) -> &str {
        "GenreOverlapFilter"
    }

    fn apply<'m>(&self, candidates: Vec<&'m Movie>, profile: &UserProfile<'_>) -> Vec<&'m Movie> {
        if profile.genres.is_empty() {
            return Vec::new();
        }
        candidates
            .into_iter()
            .filter(|movie| movie.genres.iter().any(|genre| profile.likes_genre(genre)))
            .collect()
    }
}
