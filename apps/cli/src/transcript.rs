//! Console I/O with a session transcript.
//!
//! Every line shown to the user and every line read back goes through
//! [`Console`], which copies it into a [`Transcript`] so the `log` command can
//! save the whole session.

use std::io::{self, BufRead, Write};

/// Sink for console lines.
pub trait Transcript {
    /// Append one line.
    fn record(&mut self, line: &str);

    /// Everything recorded so far, one line per `\n`.
    fn dump(&self) -> String;
}

/// Transcript kept in memory for the lifetime of the session.
#[derive(Debug, Default, Clone)]
pub struct MemoryTranscript {
    buffer: String,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transcript for MemoryTranscript {
    fn record(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn dump(&self) -> String {
        self.buffer.clone()
    }
}

/// Line-oriented console that records its traffic.
pub struct Console<R, W, T> {
    input: R,
    output: W,
    transcript: T,
}

impl<R: BufRead, W: Write, T: Transcript> Console<R, W, T> {
    pub fn new(input: R, output: W, transcript: T) -> Self {
        Self {
            input,
            output,
            transcript,
        }
    }

    /// Print a line and record it.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        let line = line.as_ref();
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        self.transcript.record(line);
        Ok(())
    }

    /// Read a line without its terminator and record it.
    ///
    /// Closed input is reported as `UnexpectedEof`.
    pub fn ask(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.transcript.record(&line);
        Ok(line)
    }

    pub fn transcript(&self) -> &T {
        &self.transcript
    }

    pub fn into_parts(self) -> (R, W, T) {
        (self.input, self.output, self.transcript)
    }
}
