//! crates/logging-sink/src/sink/memory.rs
//! In-memory sink that captures rendered lines.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::LogSink;

#[derive(Debug, Default)]
struct Buffer {
    bytes: Vec<u8>,
    writes: usize,
}

/// Shared in-memory sink.
///
/// Clones share the same buffer, so a host can hand one clone to a logger and
/// keep another to inspect what was written. The sink also counts how many
/// lines it received, which makes "exactly one write" assertions direct.
///
/// # Examples
///
/// ```
/// use logging_sink::{LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// let observer = sink.clone();
///
/// sink.write_line(b"ready\n").unwrap();
/// assert_eq!(observer.contents_lossy(), "ready\n");
/// assert_eq!(observer.write_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Buffer>>,
    terminal: bool,
}

impl MemorySink {
    /// Creates an empty, non-interactive sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink that claims to be a terminal.
    ///
    /// Useful for exercising colour output without a real TTY.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            buffer: Arc::default(),
            terminal: true,
        }
    }

    fn buffer(&self) -> MutexGuard<'_, Buffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every byte written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.buffer().bytes.clone()
    }

    /// Returns the buffer decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buffer().bytes).into_owned()
    }

    /// Returns the buffered output split into lines without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents_lossy().lines().map(str::to_owned).collect()
    }

    /// Returns the number of [`LogSink::write_line`] calls received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.buffer().writes
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().bytes.is_empty()
    }

    /// Discards the buffered output and resets the write counter.
    pub fn clear(&self) {
        let mut buffer = self.buffer();
        buffer.bytes.clear();
        buffer.writes = 0;
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut buffer = self.buffer();
        buffer.bytes.extend_from_slice(line);
        buffer.writes += 1;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
