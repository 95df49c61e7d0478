//! Genre-overlap recommendation engine.
//!
//! For every user, every catalog movie is run through the filter pipeline
//! in catalog order. What survives is that user's recommendation list.

use crate::filter_pipeline::FilterPipeline;
use crate::profile::build_user_profile;
use data_loader::{Movie, MovieIndex, User};

/// Recommended movies for one user, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation<'a> {
    pub user: &'a User,
    pub movies: Vec<&'a Movie>,
}

impl<'a> Recommendation<'a> {
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn titles(&self) -> Vec<&'a str> {
        self.movies.iter().map(|movie| movie.title.as_str()).collect()
    }

    pub fn contains(&self, movie_id: &str) -> bool {
        self.movies.iter().any(|movie| movie.id == movie_id)
    }
}

/// Produces recommendations against one movie catalog.
pub struct RecommendationEngine<'a> {
    index: MovieIndex<'a>,
    pipeline: FilterPipeline,
}

impl<'a> RecommendationEngine<'a> {
    /// Engine using the genre-overlap pipeline
    pub fn new(movies: &'a [Movie]) -> Self {
        Self::with_pipeline(movies, FilterPipeline::genre_overlap())
    }

    pub fn with_pipeline(movies: &'a [Movie], pipeline: FilterPipeline) -> Self {
        Self {
            index: MovieIndex::new(movies),
            pipeline,
        }
    }

    /// Recommendations for a single user.
    ///
    /// A user with no watched movies, or whose movies have no genres,
    /// gets an empty list.
    pub fn recommend(&self, user: &'a User) -> Recommendation<'a> {
        let profile = build_user_profile(&self.index, user);
        let candidates: Vec<&'a Movie> = self.index.movies().iter().collect();

        Recommendation {
            user,
            movies: self.pipeline.apply(candidates, &profile),
        }
    }

    /// One recommendation per user, in user order.
    pub fn recommend_all(&self, users: &'a [User]) -> Vec<Recommendation<'a>> {
        users.iter().map(|user| self.recommend(user)).collect()
    }
}

/// Recommendations for every user against `movies`.
///
/// Empty inputs produce empty output, never an error.
pub fn generate_recommendations<'a>(
    users: &'a [User],
    movies: &'a [Movie],
) -> Vec<Recommendation<'a>> {
    RecommendationEngine::new(movies).recommend_all(users)
}
