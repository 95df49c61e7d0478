//! Parsers for the movie and user catalog files.
//!
//! Both files use the two-line record layout read by [`RecordReader`]:
//! - movies: `Title, Id` then `Genre, Genre, ...`
//! - users: `Name, Id` then `MovieId, MovieId, ...`
//!
//! Parsing is fail-fast. The first structural or semantic problem ends the
//! parse and is returned as the error; no partial catalog is handed back.
//! The user catalog can only be parsed against an already parsed movie
//! catalog, since every watched id must exist in it.

use crate::error::{Catalog, DataLoadError, Result, ValidationError};
use crate::index::MovieIndex;
use crate::ordered_set::OrderedSet;
use crate::reader::{Record, RecordReader};
use crate::types::*;
use crate::validation;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a catalog file, mapping a missing file to the catalog's own error.
fn open_catalog(path: &Path, catalog: Catalog) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(DataLoadError::FileNotFound { catalog })
        }
        Err(e) => Err(DataLoadError::IoError(e)),
    }
}

/// Iterate records of `source`, tagging reader errors with `catalog`.
fn records<R: BufRead>(source: R, catalog: Catalog) -> impl Iterator<Item = Result<Record>> {
    RecordReader::new(source)
        .map(move |record| record.map_err(|e| DataLoadError::from_record(catalog, e)))
}

/// Parse the movie catalog file.
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    read_movies(open_catalog(path, Catalog::Movies)?)
}

/// Parse a movie catalog from any buffered source.
pub fn read_movies<R: BufRead>(source: R) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for record in records(source, Catalog::Movies) {
        movies.push(parse_movie(&record?)?);
    }

    validation::validate_movie_id_uniqueness(&movies)?;
    Ok(movies)
}

fn parse_movie(record: &Record) -> Result<Movie> {
    let to_load_error = |e| DataLoadError::from_record(Catalog::Movies, e);

    let (title, id) = record.key_fields().map_err(to_load_error)?;
    validation::validate_movie_title(title)?;
    validation::validate_movie_id(title, id)?;

    let tokens = record.items().map_err(to_load_error)?;
    validation::validate_movie_genres(&tokens, id)?;

    let genres: OrderedSet<String> = tokens
        .iter()
        .map(|genre| genre.trim().to_string())
        .collect();

    Ok(Movie::new(title, id, genres.into_vec()))
}

/// Parse the user catalog file against a parsed movie catalog.
pub fn parse_users(path: &Path, movies: &[Movie]) -> Result<Vec<User>> {
    let index = MovieIndex::new(movies);
    read_users(open_catalog(path, Catalog::Users)?, &index)
}

/// Parse a user catalog from any buffered source.
pub fn read_users<R: BufRead>(source: R, movies: &MovieIndex<'_>) -> Result<Vec<User>> {
    let mut users = Vec::new();

    for record in records(source, Catalog::Users) {
        users.push(parse_user(&record?, movies)?);
    }

    validation::validate_user_id_uniqueness(&users)?;
    Ok(users)
}

fn parse_user(record: &Record, movies: &MovieIndex<'_>) -> Result<User> {
    let to_load_error = |e| DataLoadError::from_record(Catalog::Users, e);

    let (name, id) = record.key_fields().map_err(to_load_error)?;
    validation::validate_user_name(name)?;
    validation::validate_user_id(id)?;

    let tokens = record.items().map_err(to_load_error)?;
    if tokens.is_empty() {
        return Err(ValidationError::MissingMovieIds(name.to_string()).into());
    }

    let watched: OrderedSet<MovieId> = tokens
        .iter()
        .map(|movie_id| movie_id.trim().to_string())
        .collect();

    // Referential integrity against the movie catalog
    if let Some(unknown) = watched.iter().find(|movie_id| !movies.contains(movie_id)) {
        return Err(ValidationError::UnknownMovieId(unknown.clone()).into());
    }

    Ok(User::new(name, id, watched.into_vec()))
}
