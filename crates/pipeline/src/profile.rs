//! Build a UserProfile from a user and the movie catalog.
//!
//! The profile gathers, once per user, everything the filters ask about:
//! which movies were watched and which genres those movies carry.

use data_loader::{MovieIndex, User};
use std::collections::HashSet;

/// What the filters know about one user.
#[derive(Debug, Clone)]
pub struct UserProfile<'a> {
    pub user: &'a User,
    /// Watched movie ids, for O(1) exclusion checks
    pub watched: HashSet<&'a str>,
    /// Genres of every watched movie, in watch-history order.
    /// A genre shared by several watched movies appears several times.
    pub genres: Vec<&'a str>,
}

impl<'a> UserProfile<'a> {
    pub fn has_watched(&self, movie_id: &str) -> bool {
        self.watched.contains(movie_id)
    }

    pub fn likes_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|liked| *liked == genre)
    }
}

/// Build a UserProfile for `user` from the indexed catalog.
///
/// Watched ids missing from the catalog contribute no genres.
pub fn build_user_profile<'a>(index: &MovieIndex<'a>, user: &'a User) -> UserProfile<'a> {
    let watched = user.watched_movie_ids.iter().map(String::as_str).collect();

    let genres = user
        .watched_movie_ids
        .iter()
        .filter_map(|movie_id| index.get_movie(movie_id))
        .flat_map(|movie| movie.genres.iter().map(String::as_str))
        .collect();

    UserProfile {
        user,
        watched,
        genres,
    }
}
