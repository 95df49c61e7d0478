//! Genre-overlap recommendation pipeline.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - UserProfile, the per-user view the filters work from
//! - RecommendationEngine, which runs the catalog through the pipeline
//!
//! ## Architecture
//! For each user, in input order:
//! 1. Build a UserProfile: watched ids and the genres of watched movies
//! 2. Feed every catalog movie, in catalog order, through the filters
//!    (already watched, genre overlap, distinct)
//! 3. The survivors are the user's Recommendation
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::generate_recommendations;
//!
//! let recommendations = generate_recommendations(&users, &movies);
//! for rec in &recommendations {
//!     println!("{}: {}", rec.user.name, rec.titles().join(", "));
//! }
//! ```
//!
//! The engine is a pure function of its inputs and does not log.

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod profile;
pub mod traits;

// Re-export main types
pub use engine::{Recommendation, RecommendationEngine, generate_recommendations};
pub use filter_pipeline::FilterPipeline;
pub use profile::{UserProfile, build_user_profile};
pub use traits::Filter;
