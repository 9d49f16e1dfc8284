//! Core flashcard library used by the command-line study tool.
//!
//! Provides:
//! - `CardStore`, the term/definition registry with quiz and stats operations
//! - The `=|=` flat-file record format used for import and export
//! - Shared types (Flashcard, QuizResult) and the error taxonomy

pub mod error;
pub mod format;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use format::{format_record, parse, parse_record, DELIMITER};
pub use store::{CardStore, MAX_QUESTIONS};
pub use types::{Flashcard, QuizResult};
