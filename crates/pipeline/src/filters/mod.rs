//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_watched;
pub mod distinct;
pub mod genre_overlap;

// Re-export for convenience
pub use already_watched::AlreadyWatchedFilter;
pub use distinct::DistinctFilter;
pub use genre_overlap::GenreOverlapFilter;
