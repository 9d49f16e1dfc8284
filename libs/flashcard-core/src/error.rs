//! Error types for flashcard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors reported by card store operations.
///
/// None of these are fatal: callers report them and carry on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("card \"{0}\" already exists")]
    DuplicateTerm(String),

    #[error("definition \"{0}\" already exists")]
    DuplicateDefinition(String),

    #[error("no such card: \"{0}\"")]
    NotFound(String),

    #[error("file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("there are no cards to ask about")]
    NoCards,

    #[error("cannot ask {requested} questions, the limit is {max}")]
    TooManyQuestions { requested: usize, max: usize },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
