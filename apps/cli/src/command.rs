//! Actions accepted at the main prompt.

/// A parsed action. Unrecognized input becomes [`Command::Unknown`], which
/// the session loop skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
    Unknown,
}

impl Command {
    /// Get the action text as typed by the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Import => "import",
            Self::Export => "export",
            Self::Ask => "ask",
            Self::Log => "log",
            Self::HardestCard => "hardest card",
            Self::ResetStats => "reset stats",
            Self::Exit => "exit",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for Command {
    fn from(input: &str) -> Self {
        match input {
            "add" => Self::Add,
            "remove" => Self::Remove,
            "import" => Self::Import,
            "export" => Self::Export,
            "ask" => Self::Ask,
            "log" => Self::Log,
            "hardest card" => Self::HardestCard,
            "reset stats" => Self::ResetStats,
            "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}
