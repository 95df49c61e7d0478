//! Filter to remove movies the user has already watched.
//!
//! There's no point in recommending movies the user has already seen.

use crate::profile::UserProfile;
use crate::traits::Filter;
use data_loader::Movie;

/// Removes candidates that appear in the user's watch history.
///
/// ## Algorithm
/// Uses the HashSet in UserProfile.watched for O(1) lookups.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply<'m>(&self, candidates: Vec<&'m Movie>, profile: &UserProfile<'_>) -> Vec<&'m Movie> {
        candidates
            .into_iter()
            .filter(|movie| !profile.has_watched(&movie.id))
            .collect()
    }
}
