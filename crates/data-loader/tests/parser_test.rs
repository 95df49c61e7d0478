//! File-based tests for the catalog parsers.
//!
//! Each test writes its catalogs into a temporary directory and parses them
//! through the public path-based entry points.

use data_loader::{
    Catalog, DataLoadError, Dataset, FormatIssue, ValidationKind, parse_movies, parse_users,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VALID_MOVIES: &str = "\
The Shawshank Redemption, TSR001
Drama
The Godfather, TG002
Crime, Drama
The Dark Knight, TDK003
Action, Crime, Drama
";

const VALID_USERS: &str = "\
Hassan Ali, 12345678X
TSR001, TDK003
Ali Mohamed, 87654321W
TG002
";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn movie_error(contents: &str) -> DataLoadError {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "movies.txt", contents);
    parse_movies(&path).expect_err("movie catalog should be rejected")
}

fn user_error(contents: &str) -> DataLoadError {
    let dir = TempDir::new().expect("tempdir");
    let movies = parse_movies(&write(&dir, "movies.txt", VALID_MOVIES)).unwrap();
    let path = write(&dir, "users.txt", contents);
    parse_users(&path, &movies).expect_err("user catalog should be rejected")
}

#[test]
fn parse_valid_movies() {
    let dir = TempDir::new().unwrap();
    let movies = parse_movies(&write(&dir, "movies.txt", VALID_MOVIES)).unwrap();
    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0].id, "TSR001");
}

#[test]
fn parse_missing_movie_file() {
    let err = parse_movies(Path::new("non-existing/path/file.txt")).unwrap_err();
    assert!(matches!(err, DataLoadError::FileNotFound { catalog: Catalog::Movies }));
    assert_eq!(err.message(), "Movies file not found");
}

#[test]
fn parse_empty_movie_file() {
    let err = movie_error("");
    assert_eq!(err.message(), "Movies file is not formatted correctly");
}

#[test]
fn parse_movie_file_with_missing_or_empty_lines() {
    let err = movie_error("The Shawshank Redemption, TSR001\nDrama\n\nThe Godfather, TG002\nCrime\n");
    assert_eq!(err.message(), "Movies file is not formatted correctly");
    assert_eq!(err.line(), Some(3));

    let err = movie_error("The Shawshank Redemption, TSR001\nDrama\nThe Godfather, TG002\n");
    assert!(matches!(err, DataLoadError::Format { issue: FormatIssue::MissingLine, .. }));
}

#[test]
fn parse_movie_line_with_malformed_commas() {
    let err = movie_error("The Shawshank Redemption,TSR001\nDrama\n");
    assert_eq!(err.message(), "Movies file is not formatted correctly");

    let err = movie_error("The Shawshank Redemption, TSR001\nDrama,Crime\n");
    assert!(matches!(
        err,
        DataLoadError::Format { issue: FormatIssue::MalformedSeparator, line: 2, .. }
    ));
}

#[test]
fn parse_invalid_movie_titles() {
    for title in ["the shawshank Redemption", "12 Angry Men", ""] {
        let err = movie_error(&format!("{}, TSR001\nDrama\n", title));
        assert_eq!(err.message(), format!("ERROR: Movie Title {{{}}} is wrong", title));
    }
}

#[test]
fn parse_invalid_movie_ids() {
    let err = movie_error("The Shawshank Redemption, TR001\nDrama\n");
    assert_eq!(err.message(), "ERROR: Movie Id letters {TR001} are wrong");

    let err = movie_error("The Shawshank Redemption, TSR01\nDrama\n");
    assert_eq!(err.message(), "ERROR: Movie Id letters {TSR01} are wrong");

    let err = movie_error("The Shawshank Redemption, \nDrama\n");
    assert_eq!(err.message(), "ERROR: Movie Id letters {} are wrong");
}

#[test]
fn parse_repeated_movie_id_suffix() {
    let err = movie_error("The Shawshank Redemption, TSR001\nDrama\nThe Godfather, TG001\nCrime\n");
    assert_eq!(err.message(), "ERROR: Movie Id numbers {001} aren’t unique");
}

#[test]
fn parse_empty_genres() {
    let err = movie_error("The Shawshank Redemption, TSR001\n\n");
    assert_eq!(err.message(), "ERROR: A Movie Genre for {TSR001} is empty");

    let err = movie_error("The Godfather, TG002\nCrime, , Drama\n");
    match err {
        DataLoadError::Validation(e) => assert_eq!(e.kind(), ValidationKind::EmptyGenre),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn parse_repeated_movie_genres() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "movies.txt", "The Godfather, TG002\nCrime, Drama, Crime, Drama\n");
    let movies = parse_movies(&path).unwrap();
    assert_eq!(movies[0].genres, vec!["Crime", "Drama"]);
}

#[test]
fn parse_valid_users() {
    let dir = TempDir::new().unwrap();
    let movies = parse_movies(&write(&dir, "movies.txt", VALID_MOVIES)).unwrap();
    let users = parse_users(&write(&dir, "users.txt", VALID_USERS), &movies).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].id, "87654321W");
}

#[test]
fn parse_missing_user_file() {
    let err = parse_users(Path::new("non-existing/path/file.txt"), &[]).unwrap_err();
    assert_eq!(err.message(), "Users file not found");
}

#[test]
fn parse_empty_or_malformed_user_file() {
    assert_eq!(user_error("").message(), "Users file is not formatted correctly");
    assert_eq!(
        user_error("Hassan Ali, 12345678X\nTSR001\nAli Mohamed, 87654321W\n").message(),
        "Users file is not formatted correctly"
    );
    assert_eq!(
        user_error("Hassan Ali 12345678X\nTSR001\n").message(),
        "Users file is not formatted correctly"
    );
    assert_eq!(
        user_error("Hassan Ali, 12345678X\nTSR001,TG002\n").message(),
        "Users file is not formatted correctly"
    );
}

#[test]
fn parse_invalid_user_names() {
    assert_eq!(
        user_error("Hassan Ali123, 12345678X\nTSR001\n").message(),
        "ERROR: User Name {Hassan Ali123} is wrong"
    );
    assert_eq!(
        user_error(" Hassan Ali, 12345678X\nTSR001\n").message(),
        "ERROR: User Name { Hassan Ali} is wrong"
    );
}

#[test]
fn parse_invalid_user_ids() {
    for id in ["1234567XY", "1234X", ""] {
        let err = user_error(&format!("Hassan Ali, {}\nTSR001\n", id));
        assert_eq!(err.message(), format!("ERROR: User Id {{{}}} is wrong", id));
    }
}

#[test]
fn parse_repeated_user_id() {
    let err = user_error("Hassan Ali, 12345678X\nTSR001\nAli Mohamed, 12345678X\nTG002\n");
    match err {
        DataLoadError::Validation(e) => assert_eq!(e.kind(), ValidationKind::DuplicateUserId),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn parse_user_without_movies() {
    let err = user_error("Hassan Ali, 12345678X\n\n");
    assert_eq!(err.message(), "ERROR: Missing movie Ids for user {Hassan Ali}");
}

#[test]
fn parse_user_with_unknown_movie() {
    let err = user_error("Hassan Ali, 12345678X\nTSR001, TSR-001\n");
    assert!(err.message().contains("TSR-001"));
    assert!(err.message().contains("does not exist"));
}

#[test]
fn parse_repeated_watched_ids() {
    let dir = TempDir::new().unwrap();
    let movies = parse_movies(&write(&dir, "movies.txt", VALID_MOVIES)).unwrap();
    let path = write(&dir, "users.txt", "Hassan Ali, 12345678X\nTSR001, TG002, TSR001\n");
    let users = parse_users(&path, &movies).unwrap();
    assert_eq!(users[0].watched_movie_ids, vec!["TSR001", "TG002"]);
}

#[test]
fn parse_trailing_separator_on_list_lines() {
    let dir = TempDir::new().unwrap();
    let movies = parse_movies(&write(&dir, "movies.txt", "The Godfather, TG002\nCrime, Drama, \n")).unwrap();
    assert_eq!(movies[0].genres, vec!["Crime", "Drama"]);

    let path = write(&dir, "users.txt", "Hassan Ali, 12345678X\nTG002, \n");
    let users = parse_users(&path, &movies).unwrap();
    assert_eq!(users[0].watched_movie_ids, vec!["TG002"]);
}

#[test]
fn dataset_loads_both_catalogs() {
    let dir = TempDir::new().unwrap();
    let movies = write(&dir, "movies.txt", VALID_MOVIES);
    let users = write(&dir, "users.txt", VALID_USERS);
    let dataset = Dataset::load_from_files(&movies, &users).unwrap();
    assert_eq!(dataset.counts(), (3, 2));
}

#[test]
fn dataset_stops_at_movie_errors() {
    let dir = TempDir::new().unwrap();
    let movies = write(&dir, "movies.txt", "the shawshank Redemption, TSR001\nDrama\n");
    // Users file is never opened
    let err = Dataset::load_from_files(&movies, Path::new("non-existing/users.txt")).unwrap_err();
    assert_eq!(err.message(), "ERROR: Movie Title {the shawshank Redemption} is wrong");
}
