//! Core types for the flashcard store.

use crate::format;
use std::fmt;

/// A term/definition pair with its running error count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
    pub error_count: u32,
}

impl Flashcard {
    /// Create a card with no recorded errors.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            error_count: 0,
        }
    }

    /// Create a card carrying an existing error count (used by import).
    pub fn with_errors(
        term: impl Into<String>,
        definition: impl Into<String>,
        error_count: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            error_count,
        }
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format_record(self))
    }
}

/// Outcome of a single quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizResult {
    Correct,
    /// The guess matched nothing in the store.
    Wrong { correct_definition: String },
    /// The guess is the definition of a different card.
    WrongButMatchesOtherTerm {
        correct_definition: String,
        other_term: String,
    },
}

impl QuizResult {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_has_no_errors() {
        let card = Flashcard::new("foo", "bar");
        assert_eq!(card.error_count, 0);
    }

    #[test]
    fn display_uses_record_format() {
        let card = Flashcard::with_errors("France", "Paris", 3);
        assert_eq!(card.to_string(), "France=|=Paris=|=3");
    }

    #[test]
    fn only_correct_is_correct() {
        assert!(QuizResult::Correct.is_correct());
        assert!(!QuizResult::Wrong {
            correct_definition: "x".into()
        }
        .is_correct());
    }
}
