//! Flat-file record format for card sets.
//!
//! # Format
//! ```text
//! France=|=Paris=|=0
//! Germany=|=Berlin=|=2
//! ```
//!
//! One card per line: term, definition and error count joined by `=|=`.
//! The delimiter is not escaped, so terms or definitions containing it
//! cannot be stored.

use crate::error::{Result, StoreError};
use crate::types::Flashcard;

/// Field separator used in card files.
pub const DELIMITER: &str = "=|=";

/// Render a card as a single record line (without terminator).
pub fn format_record(card: &Flashcard) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        card.term, card.definition, card.error_count
    )
}

/// Parse one record line. `line_number` is only used for error reporting.
pub fn parse_record(line: &str, line_number: usize) -> Result<Flashcard> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let &[term, definition, error_count] = fields.as_slice() else {
        return Err(StoreError::MalformedRecord {
            line: line_number,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    let error_count = error_count
        .trim()
        .parse::<u32>()
        .map_err(|_| StoreError::MalformedRecord {
            line: line_number,
            reason: format!("invalid error count: {error_count}"),
        })?;

    Ok(Flashcard::with_errors(term, definition, error_count))
}

/// Parse a whole card file. Blank lines are skipped.
pub fn parse(content: &str) -> Result<Vec<Flashcard>> {
    let mut cards = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        cards.push(parse_record(line, idx + 1)?);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_record() {
        let card = parse_record("foo=|=bar=|=4", 1).unwrap();
        assert_eq!(card, Flashcard::with_errors("foo", "bar", 4));
    }

    #[test]
    fn parse_keeps_inner_whitespace() {
        let card = parse_record(" to be =|= or not =|=0", 1).unwrap();
        assert_eq!(card.term, " to be ");
        assert_eq!(card.definition, " or not ");
    }

    #[test]
    fn parse_multiple_records_with_crlf_and_blank_lines() {
        let cards = parse("a=|=1=|=0\r\n\r\nb=|=2=|=5\n").unwrap();
        assert_eq!(
            cards,
            vec![
                Flashcard::with_errors("a", "1", 0),
                Flashcard::with_errors("b", "2", 5),
            ]
        );
    }

    #[test]
    fn reject_wrong_field_count() {
        let result = parse("a=|=1=|=0\nbroken line");
        assert!(matches!(
            result,
            Err(StoreError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn reject_extra_delimiter() {
        let result = parse_record("a=|=b=|=c=|=0", 7);
        assert!(matches!(
            result,
            Err(StoreError::MalformedRecord { line: 7, .. })
        ));
    }

    #[test]
    fn reject_non_numeric_error_count() {
        let result = parse_record("a=|=b=|=lots", 3);
        assert!(matches!(
            result,
            Err(StoreError::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn reject_negative_error_count() {
        assert!(parse_record("a=|=b=|=-1", 1).is_err());
    }

    #[test]
    fn format_matches_parse() {
        let card = Flashcard::with_errors("term", "definition", 12);
        let line = format_record(&card);
        assert_eq!(line, "term=|=definition=|=12");
        assert_eq!(parse_record(&line, 1).unwrap(), card);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").unwrap().is_empty());
    }
}
