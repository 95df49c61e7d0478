//! Error types for the data-loader crate.
//!
//! There are three layers:
//! - [`RecordError`]: structural problems found by the two-line record reader
//! - [`ValidationError`]: semantic problems with a single field or a whole catalog
//! - [`DataLoadError`]: what a catalog parser hands back to its caller
//!
//! The `Display` output of [`DataLoadError`] is the exact message written to
//! the error file, so the strings here are part of the external interface.

use std::fmt;
use thiserror::Error;

/// Which catalog a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Movies,
    Users,
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Catalog::Movies => write!(f, "Movies"),
            Catalog::Users => write!(f, "Users"),
        }
    }
}

/// Why a source failed the structural (two-line grouping) checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The source has no lines at all
    EmptySource,
    /// A fields line is blank
    BlankLine,
    /// The source ended after a fields line (odd number of lines)
    MissingLine,
    /// A fields line has fewer than two fields
    MissingField,
    /// A comma that is not followed by a single space
    MalformedSeparator,
}

/// Errors produced while reading records from a catalog source.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("file is not formatted correctly ({issue:?} at line {line})")]
    Format { line: usize, issue: FormatIssue },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of a [`ValidationError`], handy for matching without the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MovieTitle,
    MovieId,
    MovieIdNotUnique,
    EmptyGenre,
    UserName,
    UserId,
    DuplicateUserId,
    MissingMovieIds,
    UnknownMovieId,
}

/// A field or catalog failed a semantic rule.
///
/// Every variant carries the literal that failed, verbatim from the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ERROR: Movie Title {{{0}}} is wrong")]
    MovieTitle(String),

    #[error("ERROR: Movie Id letters {{{0}}} are wrong")]
    MovieId(String),

    /// Carries the 3-character numeric suffix, not the full id
    #[error("ERROR: Movie Id numbers {{{0}}} aren’t unique")]
    MovieIdNotUnique(String),

    /// Carries the id of the movie whose genre list is broken
    #[error("ERROR: A Movie Genre for {{{0}}} is empty")]
    EmptyGenre(String),

    #[error("ERROR: User Name {{{0}}} is wrong")]
    UserName(String),

    #[error("ERROR: User Id {{{0}}} is wrong")]
    UserId(String),

    #[error("ERROR: User Id {{{0}}} is wrong")]
    DuplicateUserId(String),

    /// Carries the name of the user with no watched movies
    #[error("ERROR: Missing movie Ids for user {{{0}}}")]
    MissingMovieIds(String),

    #[error("ERROR: Movie Id {{{0}}} does not exist")]
    UnknownMovieId(String),
}

impl ValidationError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::MovieTitle(_) => ValidationKind::MovieTitle,
            ValidationError::MovieId(_) => ValidationKind::MovieId,
            ValidationError::MovieIdNotUnique(_) => ValidationKind::MovieIdNotUnique,
            ValidationError::EmptyGenre(_) => ValidationKind::EmptyGenre,
            ValidationError::UserName(_) => ValidationKind::UserName,
            ValidationError::UserId(_) => ValidationKind::UserId,
            ValidationError::DuplicateUserId(_) => ValidationKind::DuplicateUserId,
            ValidationError::MissingMovieIds(_) => ValidationKind::MissingMovieIds,
            ValidationError::UnknownMovieId(_) => ValidationKind::UnknownMovieId,
        }
    }

    /// The offending literal
    pub fn value(&self) -> &str {
        match self {
            ValidationError::MovieTitle(v)
            | ValidationError::MovieId(v)
            | ValidationError::MovieIdNotUnique(v)
            | ValidationError::EmptyGenre(v)
            | ValidationError::UserName(v)
            | ValidationError::UserId(v)
            | ValidationError::DuplicateUserId(v)
            | ValidationError::MissingMovieIds(v)
            | ValidationError::UnknownMovieId(v) => v,
        }
    }
}

/// Errors that stop a catalog from loading.
///
/// Parsing is fail-fast: the first problem found is the one reported.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Catalog file could not be found
    #[error("{catalog} file not found")]
    FileNotFound { catalog: Catalog },

    /// Catalog file is structurally broken
    ///
    /// `line` and `issue` are kept for diagnostics; they are not part of the message.
    #[error("{catalog} file is not formatted correctly")]
    Format {
        catalog: Catalog,
        line: usize,
        issue: FormatIssue,
    },

    /// A record or the catalog as a whole broke a semantic rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DataLoadError {
    /// Attach a catalog to a reader error.
    pub(crate) fn from_record(catalog: Catalog, err: RecordError) -> Self {
        match err {
            RecordError::Format { line, issue } => DataLoadError::Format {
                catalog,
                line,
                issue,
            },
            RecordError::Io(e) => DataLoadError::IoError(e),
        }
    }

    /// The single-line message reported to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Source line the failure was detected on, when the reader knows it.
    pub fn line(&self) -> Option<usize> {
        match self {
            DataLoadError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MovieTitle("the shawshank Redemption".into()).to_string(),
            "ERROR: Movie Title {the shawshank Redemption} is wrong"
        );
        assert_eq!(
            ValidationError::MovieId("TR001".into()).to_string(),
            "ERROR: Movie Id letters {TR001} are wrong"
        );
        assert_eq!(
            ValidationError::MovieIdNotUnique("121".into()).to_string(),
            "ERROR: Movie Id numbers {121} aren’t unique"
        );
        assert_eq!(
            ValidationError::MissingMovieIds("Hassan Ali".into()).to_string(),
            "ERROR: Missing movie Ids for user {Hassan Ali}"
        );
        assert_eq!(
            ValidationError::UnknownMovieId("TSR-001".into()).to_string(),
            "ERROR: Movie Id {TSR-001} does not exist"
        );
    }

    #[test]
    fn test_kind_and_value() {
        let err = ValidationError::DuplicateUserId("12345678X".into());
        assert_eq!(err.kind(), ValidationKind::DuplicateUserId);
        assert_eq!(err.value(), "12345678X");
        assert_eq!(err.to_string(), "ERROR: User Id {12345678X} is wrong");
    }

    #[test]
    fn test_load_error_messages() {
        let not_found = DataLoadError::FileNotFound { catalog: Catalog::Users };
        assert_eq!(not_found.message(), "Users file not found");

        let format = DataLoadError::from_record(
            Catalog::Movies,
            RecordError::Format { line: 3, issue: FormatIssue::MissingLine },
        );
        assert_eq!(format.message(), "Movies file is not formatted correctly");
        assert_eq!(format.line(), Some(3));

        let validation: DataLoadError = ValidationError::UserName(" Ali".into()).into();
        assert_eq!(validation.message(), "ERROR: User Name { Ali} is wrong");
        assert_eq!(validation.line(), None);
    }
}
