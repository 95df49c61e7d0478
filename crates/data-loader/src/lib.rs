//! # Data Loader Crate
//!
//! Loads and validates the two flat-text catalogs: movies and users.
//!
//! ## Main Components
//!
//! - **reader**: two-line record reader shared by both catalogs
//! - **validation**: field and catalog-wide validators
//! - **parser**: turn records into `Movie`s and `User`s
//! - **index**: id lookups over a parsed movie catalog, and the `Dataset` loader
//! - **types**: `Movie`, `User`
//! - **error**: reader, validation and load errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_files(
//!     Path::new("samples/movies.txt"),
//!     Path::new("samples/users.txt"),
//! )?;
//! let (movies, users) = dataset.counts();
//! ```
//!
//! Nothing in this crate logs. Callers decide what to report.

// Public modules
pub mod error;
pub mod index;
pub mod ordered_set;
pub mod parser;
pub mod reader;
pub mod types;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{
    Catalog, DataLoadError, FormatIssue, RecordError, Result, ValidationError, ValidationKind,
};
pub use index::{Dataset, MovieIndex};
pub use ordered_set::OrderedSet;
pub use parser::{parse_movies, parse_users, read_movies, read_users};
pub use reader::{Record, RecordReader};
pub use types::{Movie, MovieId, User, UserId};
