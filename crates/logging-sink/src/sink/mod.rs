//! crates/logging-sink/src/sink/mod.rs
//! The [`LogSink`] trait and the shared handle type.

use std::io;
use std::sync::Arc;

mod memory;
mod standard;
mod writer;

pub use memory::MemorySink;
pub use standard::StandardStream;
pub use writer::WriterSink;

/// Destination for rendered log lines.
///
/// Implementations receive a complete line, terminator included, and must
/// forward it with a single write. The `&self` receiver allows one sink to be
/// shared between every thread that logs through the same logger.
pub trait LogSink: Send + Sync {
    /// Writes one rendered line to the destination.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    /// Flushes any buffered output.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    /// Reports whether the destination is an interactive terminal.
    ///
    /// Loggers consult this when deciding whether to emit ANSI colour codes.
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<S> LogSink for Arc<S>
where
    S: LogSink + ?Sized,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

impl<S> LogSink for Box<S>
where
    S: LogSink + ?Sized,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

/// Shared, type-erased sink handle stored by loggers.
pub type SinkHandle = Arc<dyn LogSink>;

/// Returns a handle to the process's standard error stream.
#[must_use]
pub fn stderr() -> SinkHandle {
    Arc::new(StandardStream::Stderr)
}

/// Returns a handle to the process's standard output stream.
#[must_use]
pub fn stdout() -> SinkHandle {
    Arc::new(StandardStream::Stdout)
}
