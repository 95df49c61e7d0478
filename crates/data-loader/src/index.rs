//! Lookup structures over the parsed catalogs.
//!
//! - [`MovieIndex`]: borrowed id -> movie map, used for the referential
//!   check on watch histories and for genre lookups when recommending
//! - [`Dataset`]: both catalogs, loaded in dependency order

use crate::error::Result;
use crate::parser;
use crate::types::{Movie, User};
use std::collections::HashMap;
use std::path::Path;

/// Id lookup over a movie catalog.
///
/// Borrows the catalog; the slice keeps catalog order, the map gives O(1) lookups.
#[derive(Debug, Clone)]
pub struct MovieIndex<'a> {
    movies: &'a [Movie],
    by_id: HashMap<&'a str, &'a Movie>,
}

impl<'a> MovieIndex<'a> {
    /// Index a catalog. On repeated ids the first movie wins.
    pub fn new(movies: &'a [Movie]) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        for movie in movies {
            by_id.entry(movie.id.as_str()).or_insert(movie);
        }
        Self { movies, by_id }
    }

    pub fn get_movie(&self, id: &str) -> Option<&'a Movie> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All movies, in catalog order
    pub fn movies(&self) -> &'a [Movie] {
        self.movies
    }
}

/// Both catalogs of one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub movies: Vec<Movie>,
    pub users: Vec<User>,
}

impl Dataset {
    /// Load the movie catalog, then the user catalog against it.
    ///
    /// The user file is not opened if the movie catalog fails.
    pub fn load_from_files(movie_path: &Path, user_path: &Path) -> Result<Self> {
        let movies = parser::parse_movies(movie_path)?;
        let users = parser::parse_users(user_path, &movies)?;
        Ok(Self { movies, users })
    }

    /// Get counts for logging
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.users.len())
    }
}
