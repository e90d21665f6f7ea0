#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a small, embeddable logging facility for native client
//! libraries. Call sites hand it a severity, a source location, a namespace
//! label and a message; the facility filters the record by severity, renders
//! it as one fixed-column text line and writes that line to a single sink.
//!
//! # Design
//!
//! - [`Severity`] is the ordered TRACE..FATAL scale, with
//!   [`level_from_name`] translating external configuration values.
//! - [`format_record`] renders a [`LogRecord`] in plain or ANSI-colour form.
//! - [`Logger`] holds the configuration (sink, minimum level, quiet flag,
//!   optional lock callback and user data) and owns the entry point
//!   [`Logger::log`].
//! - [`global()`] is the process-wide logger used by the free functions
//!   ([`log`], [`set_output`], [`set_level`], ...) and the call-site macros
//!   ([`log_info!`], [`sf_log_warn!`], ...).
//!
//! The facility owns no mutual-exclusion primitive for the sink. Hosts that
//! log from several threads install a lock callback with
//! [`Logger::set_lock`]; the callback wraps exactly the render-and-write
//! section of records that pass the filter.
//!
//! # Invariants
//!
//! - A record is written only when the logger is not quiet and
//!   `severity >= level`; otherwise the call returns with no side effect.
//! - Each call that passes the filter produces exactly one sink write.
//! - Every lock acquisition is paired with exactly one release, even when the
//!   sink fails or panics.
//! - Logging never reports errors to the caller.
//!
//! # Errors
//!
//! Only configuration parsing fails: [`ParseSeverityError`] for unknown level
//! names and [`ConfigError`] for invalid environment values.
//!
//! # Examples
//!
//! ```
//! use logging::{Logger, MemorySink, Severity, log_at};
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::with_sink(buffer.clone());
//! logger.set_level(Severity::Info);
//!
//! log_at!(logger, Severity::Debug, "NS", "x={}", 5);
//! log_at!(logger, Severity::Info, "NS", "y={}", 7);
//!
//! assert_eq!(buffer.write_count(), 1);
//! assert!(buffer.contents_lossy().ends_with("y=7\n"));
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the [`LogSink`] trait and the bundled destinations.

mod config;
mod error;
mod format;
mod global;
mod levels;
mod lock;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

/// Namespace used by the `log_*!` macros.
pub const DEFAULT_NAMESPACE: &str = "C";

pub use config::{COLOR_ENV, ColorChoice, LEVEL_ENV, LoggerConfig, QUIET_ENV};
pub use error::{ConfigError, ParseSeverityError};
pub use format::{
    FILE_WIDTH, LEVEL_WIDTH, LINE_WIDTH, LogRecord, NAMESPACE_WIDTH, file_name, format_record,
    format_record_at, format_timestamp, now, render_into,
};
pub use global::{
    clear_lock, global, log, set_color, set_level, set_lock, set_lock_callback, set_output,
    set_output_handle, set_quiet, set_udata,
};
pub use levels::{Severity, level_from_name};
pub use lock::{LockCallback, UserData};
pub use logger::{Logger, LoggerSnapshot};
pub use logging_sink::{LogSink, MemorySink, SinkHandle, StandardStream, WriterSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{FacilityLayer, init_tracing, try_init_tracing};
