#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `native-log` bundles the workspace's logging crates behind one dependency
//! for host libraries:
//!
//! - [`logging`] provides severities, the line formatter, the [`Logger`] and
//!   its process-wide instance, and the call-site macros.
//! - [`logging_sink`] provides the [`LogSink`] trait and the stderr, writer
//!   and in-memory destinations.
//!
//! # Examples
//!
//! Route the process-wide logger to a file and raise the minimum level:
//!
//! ```no_run
//! use native_log::{LoggerConfig, Severity, WriterSink};
//!
//! native_log::set_output(WriterSink::append("/var/log/client.log")?);
//! LoggerConfig::from_env()
//!     .unwrap_or_default()
//!     .apply(native_log::global());
//! native_log::set_level(Severity::Info);
//!
//! native_log::log_info!("connected in {} ms", 12);
//! native_log::sf_log_warn!("HTTP", "retry {} of {}", 1, 3);
//! # Ok::<(), std::io::Error>(())
//! ```

pub use logging;
pub use logging_sink;

pub use logging::{
    COLOR_ENV, ColorChoice, ConfigError, DEFAULT_NAMESPACE, LEVEL_ENV, LockCallback, LogRecord,
    Logger, LoggerConfig, LoggerSnapshot, ParseSeverityError, QUIET_ENV, Severity, UserData,
    clear_lock, file_name, format_record, format_record_at, global, level_from_name, log,
    set_color, set_level, set_lock, set_lock_callback, set_output, set_output_handle, set_quiet,
    set_udata,
};
pub use logging::{
    log_at, log_debug, log_error, log_fatal, log_info, log_trace, log_warn, sf_log, sf_log_debug,
    sf_log_error, sf_log_fatal, sf_log_info, sf_log_trace, sf_log_warn,
};
#[cfg(feature = "tracing")]
pub use logging::{FacilityLayer, init_tracing, try_init_tracing};
pub use logging_sink::{LogSink, MemorySink, SinkHandle, StandardStream, WriterSink, stderr, stdout};
