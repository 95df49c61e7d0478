//! Field and catalog validators.
//!
//! Every function here is a pure check returning `Ok(())` or the
//! [`ValidationError`] describing the first rule the input breaks.
//! Parsers call them in a fixed order and stop at the first failure.

use crate::error::ValidationError;
use crate::types::{Movie, User};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Number of trailing digits in a movie id
pub const MOVIE_ID_SUFFIX_LEN: usize = 3;

/// Exact length of a user id
pub const USER_ID_LEN: usize = 9;

/// Leading characters of a user id that must be digits
const USER_ID_DIGITS: usize = USER_ID_LEN - 1;

// ASCII letters and ASCII whitespace, starting with a letter, at least two characters
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)^[A-Za-z][A-Za-z\s]+$").expect("valid name regex"));

static MOVIE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").expect("valid movie id regex"));

static USER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid user id regex"));

/// First character of every word of a title, in order.
///
/// Words are separated by any run of whitespace, tabs included.
///
/// Example: "The Shawshank Redemption" -> "TSR"
pub fn acronym(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// The numeric part of a movie id (its last three characters).
pub fn movie_id_suffix(id: &str) -> &str {
    id.char_indices()
        .rev()
        .nth(MOVIE_ID_SUFFIX_LEN - 1)
        .map(|(start, _)| &id[start..])
        .unwrap_or(id)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Title is letters and spaces, and every word is capitalised.
pub fn validate_movie_title(title: &str) -> Result<(), ValidationError> {
    let well_formed = NAME_PATTERN.is_match(title)
        && title
            .split_whitespace()
            .all(|word| word.starts_with(|c: char| c.is_ascii_uppercase()));

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::MovieTitle(title.to_string()))
    }
}

/// Id is the title's acronym followed by exactly three digits.
pub fn validate_movie_id(title: &str, id: &str) -> Result<(), ValidationError> {
    if !MOVIE_ID_PATTERN.is_match(id) || id.len() <= MOVIE_ID_SUFFIX_LEN {
        return Err(ValidationError::MovieId(id.to_string()));
    }

    // ASCII only past the pattern check, byte offsets are char offsets
    let (letters, digits) = id.split_at(id.len() - MOVIE_ID_SUFFIX_LEN);
    if letters != acronym(title) || !all_digits(digits) {
        return Err(ValidationError::MovieId(id.to_string()));
    }
    Ok(())
}

/// Genre list is non-empty and no genre is blank.
pub fn validate_movie_genres<S: AsRef<str>>(
    genres: &[S],
    movie_id: &str,
) -> Result<(), ValidationError> {
    if genres.is_empty() || genres.iter().any(|genre| genre.as_ref().trim().is_empty()) {
        return Err(ValidationError::EmptyGenre(movie_id.to_string()));
    }
    Ok(())
}

/// Name is letters and spaces, starting with a letter.
pub fn validate_user_name(name: &str) -> Result<(), ValidationError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::UserName(name.to_string()))
    }
}

/// Id is nine alphanumerics, the first eight of them digits.
///
/// The ninth character may be any letter or digit.
pub fn validate_user_id(id: &str) -> Result<(), ValidationError> {
    let well_formed = USER_ID_PATTERN.is_match(id)
        && id.len() == USER_ID_LEN
        && all_digits(&id[..USER_ID_DIGITS]);

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::UserId(id.to_string()))
    }
}

/// No two movies share the same three-digit id suffix.
///
/// Only the suffix is compared, so `TSR001` and `TG001` collide.
pub fn validate_movie_id_uniqueness(movies: &[Movie]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for movie in movies {
        let suffix = movie_id_suffix(&movie.id);
        if !seen.insert(suffix) {
            return Err(ValidationError::MovieIdNotUnique(suffix.to_string()));
        }
    }
    Ok(())
}

/// No two users share the same id.
pub fn validate_user_id_uniqueness(users: &[User]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for user in users {
        if !seen.insert(user.id.as_str()) {
            return Err(ValidationError::DuplicateUserId(user.id.clone()));
        }
    }
    Ok(())
}
