//! Interactive command-line front end for `flashcard-core`.

pub mod command;
pub mod config;
pub mod session;
pub mod transcript;

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, Config};
use crate::session::Session;
use crate::transcript::{Console, MemoryTranscript};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the interactive console.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load(Cli::parse())?;
    tracing::info!(?config, "starting session");

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), MemoryTranscript::new());
    let mut session = Session::new(config, console);
    session.run()?;

    tracing::info!("session finished");
    Ok(())
}
