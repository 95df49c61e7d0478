//! Core domain types for the movie and user catalogs.
//!
//! Both entities are plain owned structs built once by their parser and
//! never mutated afterwards. Ids stay strings: their textual shape (acronym
//! prefix, numeric suffix) is what the validators check.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Movie identifier, e.g. `TSR001`: title acronym followed by three digits
pub type MovieId = String;

/// User identifier, e.g. `12345678X`: eight digits and one alphanumeric
pub type UserId = String;

// =============================================================================
// Movie
// =============================================================================

/// A movie from the movie catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub id: MovieId,
    /// Unique genres, in the order they first appear on the source line
    pub genres: Vec<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, id: impl Into<MovieId>, genres: Vec<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            genres,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A user from the audience catalog together with their watch history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub id: UserId,
    /// Unique movie ids, in the order they first appear on the source line.
    /// Every id refers to a movie of the catalog the user was parsed against.
    pub watched_movie_ids: Vec<MovieId>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<UserId>,
        watched_movie_ids: Vec<MovieId>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            watched_movie_ids,
        }
    }
}
