//! crates/logging/src/logger.rs
//! Logger state and the entry point every call site goes through.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use logging_sink::{LogSink, SinkHandle, StandardStream};

use crate::config::ColorChoice;
use crate::format::{LogRecord, file_name, format_record};
use crate::levels::Severity;
use crate::lock::{LockCallback, LockGuard, UserData};

/// Destination and synchronisation settings shared by every log call.
struct Shared {
    sink: SinkHandle,
    color_choice: ColorChoice,
    color: bool,
    lock: Option<Arc<dyn LockCallback>>,
    udata: Option<UserData>,
}

impl Shared {
    fn new(sink: SinkHandle) -> Self {
        let color_choice = ColorChoice::default();
        let color = color_choice.resolve(sink.is_terminal());
        Self {
            sink,
            color_choice,
            color,
            lock: None,
            udata: None,
        }
    }
}

/// Point-in-time view of a logger's configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoggerSnapshot {
    /// Minimum severity that is written.
    pub level: Severity,
    /// Whether all output is suppressed.
    pub quiet: bool,
    /// Configured colour policy.
    pub color_choice: ColorChoice,
    /// Whether rendered lines currently carry colour codes.
    pub color: bool,
    /// Whether a lock callback is installed.
    pub lock_installed: bool,
    /// Whether user data is installed.
    pub udata_installed: bool,
}

/// A single-sink, synchronous logger.
///
/// The level and quiet flag are atomics so the filter check on the hot path
/// takes no lock and allocates nothing. Setters are intended for start-up:
/// they are memory safe to call at any time, but a record in flight may be
/// written with either the old or the new settings.
///
/// # Examples
///
/// ```
/// use logging::{Logger, MemorySink, Severity};
///
/// let buffer = MemorySink::new();
/// let logger = Logger::with_sink(buffer.clone());
/// logger.set_level(Severity::Info);
///
/// logger.log(Severity::Debug, "a.c", 10, "NS", format_args!("x={}", 5));
/// assert!(buffer.is_empty());
///
/// logger.log(Severity::Info, "a.c", 11, "NS", format_args!("y={}", 7));
/// let line = buffer.contents_lossy();
/// assert!(line.ends_with("y=7\n"));
/// assert!(line.contains("INFO") && line.contains("NS") && line.contains("11"));
/// ```
pub struct Logger {
    level: AtomicU8,
    quiet: AtomicBool,
    shared: RwLock<Shared>,
}

impl Logger {
    /// Creates a logger writing to standard error at level `TRACE`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_handle(Arc::new(StandardStream::Stderr))
    }

    /// Creates a logger writing to `sink`.
    #[must_use]
    pub fn with_sink<S>(sink: S) -> Self
    where
        S: LogSink + 'static,
    {
        Self::with_handle(Arc::new(sink))
    }

    /// Creates a logger writing to an existing shared handle.
    #[must_use]
    pub fn with_handle(sink: SinkHandle) -> Self {
        Self {
            level: AtomicU8::new(Severity::Trace.as_u8()),
            quiet: AtomicBool::new(false),
            shared: RwLock::new(Shared::new(sink)),
        }
    }

    fn shared(&self) -> RwLockReadGuard<'_, Shared> {
        self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn shared_mut(&self) -> RwLockWriteGuard<'_, Shared> {
        self.shared.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the destination for subsequent records.
    ///
    /// The previous sink is neither flushed nor closed; it is returned so the
    /// caller can do either.
    pub fn set_output<S>(&self, sink: S) -> SinkHandle
    where
        S: LogSink + 'static,
    {
        self.set_output_handle(Arc::new(sink))
    }

    /// Replaces the destination with an existing shared handle.
    ///
    /// The colour decision is recomputed here and cached until the next
    /// output or colour change.
    pub fn set_output_handle(&self, sink: SinkHandle) -> SinkHandle {
        let mut shared = self.shared_mut();
        shared.color = shared.color_choice.resolve(sink.is_terminal());
        std::mem::replace(&mut shared.sink, sink)
    }

    /// Returns the current destination.
    #[must_use]
    pub fn output(&self) -> SinkHandle {
        Arc::clone(&self.shared().sink)
    }

    /// Sets the colour policy and re-resolves it against the current sink.
    pub fn set_color(&self, choice: ColorChoice) {
        let mut shared = self.shared_mut();
        shared.color_choice = choice;
        shared.color = choice.resolve(shared.sink.is_terminal());
    }

    /// Drops records below `level` before any formatting takes place.
    pub fn set_level(&self, level: Severity) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Returns the minimum severity that is written.
    #[must_use]
    pub fn level(&self) -> Severity {
        Severity::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Suppresses every record, whatever its severity, while `quiet` is set.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    /// Reports whether output is suppressed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Installs a closure as the lock callback.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use logging::{Logger, MemorySink, Severity, UserData};
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let logger = Logger::with_sink(MemorySink::new());
    /// logger.set_lock(move |_: Option<&UserData>, _acquire: bool| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    ///
    /// logger.log(Severity::Info, "a.c", 1, "C", format_args!("locked"));
    /// assert_eq!(calls.load(Ordering::SeqCst), 2);
    /// ```
    pub fn set_lock<F>(&self, callback: F)
    where
        F: Fn(Option<&UserData>, bool) + Send + Sync + 'static,
    {
        self.set_lock_callback(Arc::new(callback));
    }

    /// Installs a shared [`LockCallback`] implementation.
    pub fn set_lock_callback(&self, callback: Arc<dyn LockCallback>) {
        self.shared_mut().lock = Some(callback);
    }

    /// Removes the lock callback; subsequent records are written unsynchronised.
    pub fn clear_lock(&self) {
        self.shared_mut().lock = None;
    }

    /// Sets the opaque value passed to the lock callback.
    pub fn set_udata(&self, udata: Option<UserData>) {
        self.shared_mut().udata = udata;
    }

    /// Returns the opaque value passed to the lock callback.
    #[must_use]
    pub fn udata(&self) -> Option<UserData> {
        self.shared().udata.clone()
    }

    /// Reports whether a record at `severity` would be written.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        !self.is_quiet() && severity >= self.level()
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> LoggerSnapshot {
        let shared = self.shared();
        LoggerSnapshot {
            level: self.level(),
            quiet: self.is_quiet(),
            color_choice: shared.color_choice,
            color: shared.color,
            lock_installed: shared.lock.is_some(),
            udata_installed: shared.udata.is_some(),
        }
    }

    /// Flushes the current sink.
    pub fn flush(&self) -> io::Result<()> {
        self.output().flush()
    }

    /// Emits one record.
    ///
    /// Filtered records return before any side effect: no lock, no
    /// timestamp, no allocation. A record that passes the filter is rendered
    /// and written inside the host lock when one is installed; the lock is
    /// released on every exit path. Write failures are discarded.
    pub fn log(
        &self,
        severity: Severity,
        file: &str,
        line: u32,
        namespace: &str,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let (sink, color, lock, udata) = {
            let shared = self.shared();
            (
                Arc::clone(&shared.sink),
                shared.color,
                shared.lock.clone(),
                shared.udata.clone(),
            )
        };

        let _guard = lock
            .as_deref()
            .map(|callback| LockGuard::acquire(callback, udata.as_ref()));

        let record = LogRecord::new(severity, file_name(file), line, namespace, args);
        let rendered = format_record(&record, color);
        let _ = sink.write_line(&rendered);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}
