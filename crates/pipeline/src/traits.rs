//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a candidate list.

use crate::profile::UserProfile;
use data_loader::Movie;

/// Core trait for filtering candidate movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Candidates are borrowed from the catalog; filters only drop entries
/// - Filters must keep the relative order of the candidates they keep,
///   so catalog order survives the whole pipeline
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `profile` - The user's watch history and aggregated genres
    fn apply<'m>(&self, candidates: Vec<&'m Movie>, profile: &UserProfile<'_>) -> Vec<&'m Movie>;
}
