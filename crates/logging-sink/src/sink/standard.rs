//! crates/logging-sink/src/sink/standard.rs
//! Standard output and standard error sinks.

use std::fmt;
use std::io::{self, Write};

use is_terminal::IsTerminal;

use super::LogSink;

/// One of the process's standard output streams.
///
/// Each write locks the stream for the duration of a single `write_all`, so a
/// line is never split by another writer going through the same standard
/// handle. [`StandardStream::Stderr`] is the default destination of a fresh
/// logger.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StandardStream {
    /// The process's standard output.
    Stdout,
    /// The process's standard error.
    #[default]
    Stderr,
}

impl StandardStream {
    /// Returns the conventional name of the stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for StandardStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LogSink for StandardStream {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().write_all(line),
            Self::Stderr => io::stderr().lock().write_all(line),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().flush(),
            Self::Stderr => io::stderr().lock().flush(),
        }
    }

    fn is_terminal(&self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
        }
    }
}
