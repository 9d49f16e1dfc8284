//! In-memory card registry.
//!
//! Cards are kept in insertion order. Two indexes sit beside them: term to
//! position, and definition to term. The second one is what lets a quiz tell
//! the user that a wrong answer belongs to another card.

use crate::error::{Result, StoreError};
use crate::format;
use crate::types::{Flashcard, QuizResult};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Upper bound on questions in one quiz.
pub const MAX_QUESTIONS: usize = 10_000;

/// Registry of flashcards keyed by term.
///
/// Terms are unique. Definitions are unique for cards created with [`add`];
/// import overwrites by term and does not check definitions.
///
/// [`add`]: CardStore::add
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Flashcard>,
    by_term: HashMap<String, usize>,
    by_definition: HashMap<String, String>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.iter()
    }

    pub fn get(&self, term: &str) -> Option<&Flashcard> {
        self.by_term.get(term).map(|&idx| &self.cards[idx])
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.by_term.contains_key(term)
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.by_definition.contains_key(definition)
    }

    /// Term currently owning `definition`, if any.
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.by_definition.get(definition).map(String::as_str)
    }

    /// Create a new card. Both term and definition must be unused.
    pub fn add(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<&Flashcard> {
        let term = term.into();
        let definition = definition.into();

        if self.contains_term(&term) {
            return Err(StoreError::DuplicateTerm(term));
        }
        if self.contains_definition(&definition) {
            return Err(StoreError::DuplicateDefinition(definition));
        }

        let idx = self.cards.len();
        self.by_term.insert(term.clone(), idx);
        self.by_definition.insert(definition.clone(), term.clone());
        self.cards.push(Flashcard::new(term, definition));
        Ok(&self.cards[idx])
    }

    /// Delete a card by term.
    pub fn remove(&mut self, term: &str) -> Result<Flashcard> {
        let idx = self
            .by_term
            .remove(term)
            .ok_or_else(|| StoreError::NotFound(term.to_string()))?;
        let card = self.cards.remove(idx);

        self.release_definition(&card.definition, term);
        for pos in self.by_term.values_mut() {
            if *pos > idx {
                *pos -= 1;
            }
        }

        Ok(card)
    }

    /// Insert or overwrite a card by term. An existing term keeps its position.
    fn upsert(&mut self, card: Flashcard) {
        let existing = self.by_term.get(&card.term).copied();
        match existing {
            Some(idx) => {
                let old = std::mem::replace(&mut self.cards[idx], card);
                self.release_definition(&old.definition, &old.term);
                let card = &self.cards[idx];
                self.by_definition
                    .insert(card.definition.clone(), card.term.clone());
            }
            None => {
                self.by_term.insert(card.term.clone(), self.cards.len());
                self.by_definition
                    .insert(card.definition.clone(), card.term.clone());
                self.cards.push(card);
            }
        }
    }

    /// Drop `owner`'s claim on `definition`. Another card still holding the
    /// same definition takes the key over.
    fn release_definition(&mut self, definition: &str, owner: &str) {
        if self.term_for_definition(definition) != Some(owner) {
            return;
        }
        let holder = self
            .cards
            .iter()
            .find(|c| c.definition == definition && c.term != owner)
            .map(|c| c.term.clone());
        match holder {
            Some(term) => {
                self.by_definition.insert(definition.to_string(), term);
            }
            None => {
                self.by_definition.remove(definition);
            }
        }
    }

    /// Load cards from a card file. Returns how many records were loaded.
    ///
    /// A malformed line aborts the whole import and leaves the store untouched.
    pub fn import_from(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::SourceNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        self.import_from_reader(BufReader::new(file))
    }

    /// Load cards from any line-oriented source.
    pub fn import_from_reader<R: BufRead>(&mut self, mut reader: R) -> Result<usize> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let cards = format::parse(&content)?;

        let count = cards.len();
        for card in cards {
            self.upsert(card);
        }
        Ok(count)
    }

    /// Write every card to `path`, replacing any existing file.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let count = self.export_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(count)
    }

    /// Write every card as one record line, in insertion order.
    pub fn export_to_writer<W: Write>(&self, mut writer: W) -> Result<usize> {
        for card in &self.cards {
            writeln!(writer, "{}", format::format_record(card))?;
        }
        Ok(self.cards.len())
    }

    /// Pick the terms to ask about.
    ///
    /// With `n` up to the card count, `n` distinct cards are drawn at random.
    /// Past that, whole passes over the store in insertion order are repeated
    /// and cut to `n`. Asking for more than [`MAX_QUESTIONS`] is rejected.
    pub fn select_cards<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<String>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        if n > MAX_QUESTIONS {
            return Err(StoreError::TooManyQuestions {
                requested: n,
                max: MAX_QUESTIONS,
            });
        }
        if self.is_empty() {
            return Err(StoreError::NoCards);
        }

        if n <= self.len() {
            let mut terms: Vec<&Flashcard> = self.cards.iter().collect();
            terms.shuffle(rng);
            Ok(terms.into_iter().take(n).map(|c| c.term.clone()).collect())
        } else {
            Ok(self
                .cards
                .iter()
                .cycle()
                .take(n)
                .map(|c| c.term.clone())
                .collect())
        }
    }

    /// Check a guess for `term` and count the miss against the card.
    ///
    /// The guess is compared case-insensitively; the lookup for another
    /// card owning the guess is exact.
    pub fn grade(&mut self, term: &str, guess: &str) -> Result<QuizResult> {
        let idx = *self
            .by_term
            .get(term)
            .ok_or_else(|| StoreError::NotFound(term.to_string()))?;

        let definition = &self.cards[idx].definition;
        if guess.to_lowercase() == definition.to_lowercase() {
            return Ok(QuizResult::Correct);
        }

        let correct_definition = definition.clone();
        let result = match self.term_for_definition(guess) {
            Some(other) if other != term => QuizResult::WrongButMatchesOtherTerm {
                correct_definition,
                other_term: other.to_string(),
            },
            _ => QuizResult::Wrong { correct_definition },
        };

        let card = &mut self.cards[idx];
        card.error_count = card.error_count.saturating_add(1);
        Ok(result)
    }

    /// Run a full quiz of `n` questions, asking `answer` for each guess.
    pub fn quiz<R, F, E>(
        &mut self,
        n: usize,
        rng: &mut R,
        mut answer: F,
    ) -> std::result::Result<Vec<QuizResult>, E>
    where
        R: Rng + ?Sized,
        F: FnMut(&str) -> std::result::Result<String, E>,
        E: From<StoreError>,
    {
        let terms = self.select_cards(n, rng)?;
        let mut results = Vec::with_capacity(terms.len());

        for term in terms {
            let guess = answer(&term)?;
            results.push(self.grade(&term, &guess)?);
        }

        Ok(results)
    }

    /// Highest error count in the store, or 0 when empty.
    pub fn max_error_count(&self) -> u32 {
        self.cards.iter().map(|c| c.error_count).max().unwrap_or(0)
    }

    /// Terms sharing the highest non-zero error count, in insertion order.
    pub fn hardest_cards(&self) -> Vec<&str> {
        let max_error = self.max_error_count();
        if max_error == 0 {
            return Vec::new();
        }
        self.cards
            .iter()
            .filter(|c| c.error_count == max_error)
            .map(|c| c.term.as_str())
            .collect()
    }

    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.error_count = 0;
        }
    }
}
