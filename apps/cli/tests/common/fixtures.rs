//! Test fixtures and factory functions for creating test data.

use flashcard_core::CardStore;

/// Generate card file content with a specified number of cards.
///
/// # Arguments
/// * `num_cards` - Number of records to generate
/// * `errors` - Error count written for every record
pub fn sample_card_file(num_cards: usize, errors: u32) -> String {
    (0..num_cards)
        .map(|i| format!("Term {}=|=Definition {}=|={}\n", i + 1, i + 1, errors))
        .collect()
}

/// Build a store from term/definition pairs.
pub fn store_with(pairs: &[(&str, &str)]) -> CardStore {
    let mut store = CardStore::new();
    for (term, definition) in pairs {
        store
            .add(*term, *definition)
            .expect("fixture pairs must be unique");
    }
    store
}

/// Join console lines the way they appear on screen.
pub fn script(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
