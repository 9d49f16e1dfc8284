//! Shared helpers for session tests.
//!
//! Sessions run against scripted input and an in-memory output buffer, so
//! every test sees exactly what the user would.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Cursor;

use flashcard_core::CardStore;
use flashcards_cli::config::Config;
use flashcards_cli::session::Session;
use flashcards_cli::transcript::{Console, MemoryTranscript, Transcript};

pub use flashcards_cli::session::PROMPT;

/// Everything a finished session leaves behind.
pub struct TestRun {
    pub output: String,
    pub transcript: String,
    pub store: CardStore,
}

impl TestRun {
    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

/// Run a session on an empty store.
pub fn run_session(config: Config, input: &str) -> TestRun {
    run_with_store(config, CardStore::new(), input)
}

/// Run a session on a prepared store.
pub fn run_with_store(config: Config, store: CardStore, input: &str) -> TestRun {
    let console = Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        MemoryTranscript::new(),
    );
    let mut session = Session::with_store(config, console, store);
    session.run().expect("session should not fail on in-memory console");

    let (store, console) = session.into_parts();
    let (_, output, transcript) = console.into_parts();
    TestRun {
        output: String::from_utf8(output).expect("console output is utf-8"),
        transcript: transcript.dump(),
        store,
    }
}

/// Config with a fixed seed and no files.
pub fn seeded_config() -> Config {
    Config {
        seed: Some(1),
        ..Config::default()
    }
}
