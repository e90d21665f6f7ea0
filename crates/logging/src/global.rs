//! crates/logging/src/global.rs
//! Process-wide logger and the free-function call surface.
//!
//! The global logger is created on first use with the defaults of
//! [`Logger::new`]. Hosts configure it once at start-up through the setters
//! below; there is no teardown beyond process exit.

use std::fmt;
use std::sync::{Arc, LazyLock};

use logging_sink::{LogSink, SinkHandle};

use crate::config::ColorChoice;
use crate::levels::Severity;
use crate::lock::{LockCallback, UserData};
use crate::logger::Logger;

static GLOBAL: LazyLock<Logger> = LazyLock::new(Logger::new);

/// Returns the process-wide logger.
#[must_use]
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Emits one record through the process-wide logger.
///
/// Prefer the `log_*!` and `sf_log_*!` macros, which fill in the file and
/// line of the call site.
pub fn log(severity: Severity, file: &str, line: u32, namespace: &str, args: fmt::Arguments<'_>) {
    GLOBAL.log(severity, file, line, namespace, args);
}

/// Replaces the process-wide destination and returns the previous one.
pub fn set_output<S>(sink: S) -> SinkHandle
where
    S: LogSink + 'static,
{
    GLOBAL.set_output(sink)
}

/// Replaces the process-wide destination with a shared handle.
pub fn set_output_handle(sink: SinkHandle) -> SinkHandle {
    GLOBAL.set_output_handle(sink)
}

/// Sets the process-wide minimum severity.
pub fn set_level(level: Severity) {
    GLOBAL.set_level(level);
}

/// Enables or disables process-wide quiet mode.
pub fn set_quiet(quiet: bool) {
    GLOBAL.set_quiet(quiet);
}

/// Sets the process-wide colour policy.
pub fn set_color(choice: ColorChoice) {
    GLOBAL.set_color(choice);
}

/// Installs the process-wide lock callback.
pub fn set_lock<F>(callback: F)
where
    F: Fn(Option<&UserData>, bool) + Send + Sync + 'static,
{
    GLOBAL.set_lock(callback);
}

/// Installs a shared [`LockCallback`] on the process-wide logger.
pub fn set_lock_callback(callback: Arc<dyn LockCallback>) {
    GLOBAL.set_lock_callback(callback);
}

/// Removes the process-wide lock callback.
pub fn clear_lock() {
    GLOBAL.clear_lock();
}

/// Sets the opaque value passed to the process-wide lock callback.
pub fn set_udata(udata: Option<UserData>) {
    GLOBAL.set_udata(udata);
}
