//! Command-line flags and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Study flashcards from the terminal.
#[derive(Debug, Default, Parser)]
#[command(
    name = "flashcards",
    about = "Specify files to import cards from at the start and/or export cards to at the exit",
    version
)]
pub struct Cli {
    /// File to import flashcards from at the start of the program
    #[arg(short = 'i', long = "import_from", value_name = "PATH")]
    pub import_from: Option<PathBuf>,

    /// File to save flashcards to at the end of the program
    #[arg(short = 'e', long = "export_to", value_name = "PATH")]
    pub export_to: Option<PathBuf>,

    /// Seed for the quiz card picker (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Resolved session settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub import_from: Option<PathBuf>,
    pub export_to: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Config {
    /// Merge flags with the process environment. Flags win.
    ///
    /// Env vars:
    /// - FLASHCARDS_IMPORT_FROM: file to load before the prompt loop
    /// - FLASHCARDS_EXPORT_TO: file to save to on exit
    /// - FLASHCARDS_SEED: u64 seed for quiz selection
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed = match cli.seed {
            Some(seed) => Some(seed),
            None => env("FLASHCARDS_SEED")
                .map(|value| {
                    value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidVar {
                        name: "FLASHCARDS_SEED",
                        value,
                    })
                })
                .transpose()?,
        };

        Ok(Self {
            import_from: cli
                .import_from
                .or_else(|| env("FLASHCARDS_IMPORT_FROM").map(PathBuf::from)),
            export_to: cli
                .export_to
                .or_else(|| env("FLASHCARDS_EXPORT_TO").map(PathBuf::from)),
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn parses_short_and_long_flags() {
        let cli = Cli::try_parse_from(["flashcards", "-i", "in.txt", "--export_to", "out.txt"]).unwrap();
        assert_eq!(cli.import_from, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.export_to, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::try_parse_from(["flashcards"]).unwrap();
        assert!(cli.import_from.is_none());
        assert!(cli.export_to.is_none());
    }

    #[test]
    fn env_fills_missing_flags() {
        let env = env_from(&[
            ("FLASHCARDS_IMPORT_FROM", "env_in.txt"),
            ("FLASHCARDS_EXPORT_TO", "env_out.txt"),
            ("FLASHCARDS_SEED", "42"),
        ]);
        let config = Config::resolve(Cli::default(), env).unwrap();
        assert_eq!(config.import_from, Some(PathBuf::from("env_in.txt")));
        assert_eq!(config.export_to, Some(PathBuf::from("env_out.txt")));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn flags_override_env() {
        let cli = Cli {
            import_from: Some(PathBuf::from("flag.txt")),
            export_to: None,
            seed: Some(1),
        };
        let env = env_from(&[("FLASHCARDS_IMPORT_FROM", "env.txt"), ("FLASHCARDS_SEED", "9")]);
        let config = Config::resolve(cli, env).unwrap();
        assert_eq!(config.import_from, Some(PathBuf::from("flag.txt")));
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn rejects_bad_seed() {
        let env = env_from(&[("FLASHCARDS_SEED", "abc")]);
        let result = Config::resolve(Cli::default(), env);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar { name: "FLASHCARDS_SEED", .. })
        ));
    }
}
