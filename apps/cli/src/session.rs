//! Interactive prompt loop over a [`CardStore`].

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use flashcard_core::{CardStore, QuizResult, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::config::Config;
use crate::transcript::{Console, Transcript};

pub const PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// One interactive study session. Owns the store for its whole lifetime.
pub struct Session<R, W, T> {
    store: CardStore,
    console: Console<R, W, T>,
    config: Config,
    rng: StdRng,
}

impl<R: BufRead, W: Write, T: Transcript> Session<R, W, T> {
    pub fn new(config: Config, console: Console<R, W, T>) -> Self {
        Self::with_store(config, console, CardStore::new())
    }

    pub fn with_store(config: Config, console: Console<R, W, T>, store: CardStore) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            store,
            console,
            config,
            rng,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn into_parts(self) -> (CardStore, Console<R, W, T>) {
        (self.store, self.console)
    }

    /// Run until `exit` or end of input, then export if configured.
    ///
    /// Only console failures are returned; everything else is reported to the
    /// user and the loop carries on.
    pub fn run(&mut self) -> io::Result<()> {
        match self.prompt_loop() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("input closed, ending session");
                self.console.say("Bye bye!")?;
            }
            other => other?,
        }

        if let Some(path) = self.config.export_to.clone() {
            self.export_to(&path)?;
        }
        Ok(())
    }

    fn prompt_loop(&mut self) -> io::Result<()> {
        if let Some(path) = self.config.import_from.clone() {
            self.import_from(&path)?;
        }

        loop {
            self.console.say(PROMPT)?;
            let action = self.console.ask()?;

            let command = Command::from(action.as_str());
            debug!(command = command.as_str(), "dispatching");
            match command {
                Command::Exit => {
                    self.console.say("Bye bye!")?;
                    return Ok(());
                }
                Command::Unknown => continue,
                _ => {
                    self.dispatch(command)?;
                    self.console.say("")?;
                }
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::Import => {
                let path = self.ask_file_name()?;
                self.import_from(&path)
            }
            Command::Export => {
                let path = self.ask_file_name()?;
                self.export_to(&path)
            }
            Command::Ask => self.ask(),
            Command::Log => self.log(),
            Command::HardestCard => self.hardest_card(),
            Command::ResetStats => self.reset_stats(),
            Command::Exit | Command::Unknown => Ok(()),
        }
    }

    fn ask_file_name(&mut self) -> io::Result<PathBuf> {
        self.console.say("File name:")?;
        Ok(PathBuf::from(self.console.ask()?))
    }

    fn add(&mut self) -> io::Result<()> {
        self.console.say("The card:")?;
        let term = loop {
            let term = self.console.ask()?;
            if !self.store.contains_term(&term) {
                break term;
            }
            self.console
                .say(format!("The card \"{term}\" already exists. Try again:"))?;
        };

        self.console.say("The definition of the card:")?;
        let definition = loop {
            let definition = self.console.ask()?;
            if !self.store.contains_definition(&definition) {
                break definition;
            }
            self.console.say(format!(
                "The definition \"{definition}\" already exists. Try again:"
            ))?;
        };

        let message = match self.store.add(term, definition) {
            Ok(card) => {
                debug!(term = %card.term, "card added");
                format!(
                    "The pair (\"{}\":\"{}\") has been added.",
                    card.term, card.definition
                )
            }
            Err(e) => {
                warn!(error = %e, "add rejected");
                e.to_string()
            }
        };
        self.console.say(message)
    }

    fn remove(&mut self) -> io::Result<()> {
        self.console.say("Which card?")?;
        let term = self.console.ask()?;

        match self.store.remove(&term) {
            Ok(_) => {
                debug!(%term, "card removed");
                self.console.say("The card has been removed.")
            }
            Err(StoreError::NotFound(term)) => self
                .console
                .say(format!("Can't remove \"{term}\": there is no such card.")),
            Err(e) => self.console.say(e.to_string()),
        }
    }

    fn import_from(&mut self, path: &Path) -> io::Result<()> {
        match self.store.import_from(path) {
            Ok(count) => {
                info!(path = %path.display(), count, "cards imported");
                self.console.say(format!("{count} cards have been loaded."))
            }
            Err(StoreError::SourceNotFound(_)) => {
                warn!(path = %path.display(), "import file not found");
                self.console.say("File not found.")
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "import failed");
                self.console.say(format!("Import failed: {e}"))
            }
        }
    }

    fn export_to(&mut self, path: &Path) -> io::Result<()> {
        match self.store.export_to(path) {
            Ok(count) => {
                info!(path = %path.display(), count, "cards exported");
                self.console.say(format!("{count} cards have been saved."))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "export failed");
                self.console.say(format!("Error: {e}"))
            }
        }
    }

    fn ask(&mut self) -> io::Result<()> {
        self.console.say("How many times to ask?")?;
        let input = self.console.ask()?;
        let Ok(n) = input.trim().parse::<usize>() else {
            return self
                .console
                .say(format!("\"{input}\" is not a valid number."));
        };

        let terms = match self.store.select_cards(n, &mut self.rng) {
            Ok(terms) => terms,
            Err(StoreError::NoCards) => {
                return self.console.say("There are no cards to ask about.");
            }
            Err(StoreError::TooManyQuestions { max, .. }) => {
                warn!(requested = n, max, "quiz count over limit");
                return self.console.say(format!(
                    "\"{input}\" is not a valid number. Ask at most {max} questions."
                ));
            }
            Err(e) => return self.console.say(e.to_string()),
        };

        for term in terms {
            self.console
                .say(format!("Print the definition of \"{term}\":"))?;
            let guess = self.console.ask()?;

            let message = match self.store.grade(&term, &guess) {
                Ok(QuizResult::Correct) => "Correct!".to_string(),
                Ok(QuizResult::Wrong { correct_definition }) => {
                    format!("Wrong. The right answer is \"{correct_definition}\".")
                }
                Ok(QuizResult::WrongButMatchesOtherTerm {
                    correct_definition,
                    other_term,
                }) => format!(
                    "Wrong. The right answer is \"{correct_definition}\", \
                     but your definition is correct for \"{other_term}\"."
                ),
                Err(e) => e.to_string(),
            };
            debug!(%term, %message, "graded");
            self.console.say(message)?;
        }
        Ok(())
    }

    /// Save the transcript. The file name typed here is recorded too, like
    /// every other line of input.
    fn log(&mut self) -> io::Result<()> {
        let path = self.ask_file_name()?;
        match fs::write(&path, self.console.transcript().dump()) {
            Ok(()) => {
                info!(path = %path.display(), "transcript saved");
                self.console.say("The log has been saved")
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "transcript not saved");
                self.console.say(format!("Error: {e}"))
            }
        }
    }

    fn hardest_card(&mut self) -> io::Result<()> {
        let hardest = self.store.hardest_cards();
        let errors = self.store.max_error_count();

        let message = match hardest.as_slice() {
            [] => "There are no cards with errors.".to_string(),
            [term] => format!("The hardest card is \"{term}\". You have {errors} errors answering it."),
            terms => format!(
                "The hardest cards are \"{}\". You have {errors} errors answering them.",
                terms.join("\", \"")
            ),
        };
        self.console.say(message)
    }

    fn reset_stats(&mut self) -> io::Result<()> {
        self.store.reset_stats();
        self.console.say("Card statistics have been reset.")
    }
}
