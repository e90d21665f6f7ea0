//! crates/logging-sink/src/sink/writer.rs
//! Sink wrapping any `Write` implementation behind a mutex.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::mem;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use super::LogSink;

/// Sink that owns an arbitrary [`Write`] implementor.
///
/// The writer is kept behind a mutex so the sink can be shared between
/// threads. The mutex only protects the writer itself; it does not order
/// records against each other beyond the single `write_all` performed per
/// line.
///
/// # Examples
///
/// ```
/// use logging_sink::{LogSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_line(b"hello\n")?;
/// assert_eq!(sink.into_inner(), b"hello\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    terminal: bool,
}

impl<W> WriterSink<W> {
    /// Wraps `writer` in a sink that reports itself as non-interactive.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_terminal(writer, false)
    }

    /// Wraps `writer`, declaring whether it should be treated as a terminal.
    #[must_use]
    pub const fn with_terminal(writer: W, terminal: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            terminal,
        }
    }

    /// Replaces the underlying writer and returns the previous one.
    ///
    /// The previous writer is handed back unflushed so the caller decides
    /// whether to flush or close it.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_writer(&self, mut writer: W) -> W {
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        mem::swap(&mut *guard, &mut writer);
        writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<File> {
    /// Opens `path` for appending, creating it when missing.
    pub fn append<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn writes_are_forwarded_verbatim() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line(b"one\n").expect("write succeeds");
        sink.write_line(b"two").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"one\ntwo".to_vec());
    }

    #[test]
    fn replace_writer_returns_previous_output() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line(b"before\n").expect("write succeeds");

        let previous = sink.replace_writer(Vec::new());
        sink.write_line(b"after\n").expect("write succeeds");

        assert_eq!(previous, b"before\n".to_vec());
        assert_eq!(sink.into_inner(), b"after\n".to_vec());
    }

    #[test]
    fn terminal_flag_is_reported() {
        assert!(!WriterSink::new(Vec::<u8>::new()).is_terminal());
        assert!(WriterSink::with_terminal(Vec::<u8>::new(), true).is_terminal());
    }

    #[test]
    fn append_opens_file_for_appending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.log");

        {
            let sink = WriterSink::append(&path).expect("open log file");
            sink.write_line(b"first\n").expect("write succeeds");
            sink.flush().expect("flush succeeds");
        }
        {
            let sink = WriterSink::append(&path).expect("reopen log file");
            sink.write_line(b"second\n").expect("write succeeds");
        }

        let mut text = String::new();
        File::open(&path)
            .expect("open for reading")
            .read_to_string(&mut text)
            .expect("read log file");
        assert_eq!(text, "first\nsecond\n");
    }
}
