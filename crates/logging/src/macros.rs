//! crates/logging/src/macros.rs
//! Call-site macros that capture `file!()` and `line!()`.
//!
//! The `log_*!` family tags records with [`DEFAULT_NAMESPACE`](crate::DEFAULT_NAMESPACE);
//! the `sf_log_*!` family takes the namespace as its first argument. All of
//! them write through the process-wide logger. [`log_at!`](crate::log_at)
//! targets an explicit [`Logger`](crate::Logger).

/// Emits a record at an explicit severity with an explicit namespace.
///
/// # Example
/// ```
/// logging::sf_log!(logging::Severity::Info, "NET", "connected to {}:{}", "db.local", 443);
/// ```
#[macro_export]
macro_rules! sf_log {
    ($severity:expr, $ns:expr, $($arg:tt)+) => {
        $crate::log(
            $severity,
            ::core::file!(),
            ::core::line!(),
            $ns,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Emits a record through a specific logger.
///
/// # Example
/// ```
/// use logging::{Logger, MemorySink, Severity, log_at};
///
/// let buffer = MemorySink::new();
/// let logger = Logger::with_sink(buffer.clone());
/// log_at!(logger, Severity::Warn, "HTTP", "status={}", 503);
/// assert!(buffer.contents_lossy().ends_with("status=503\n"));
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $ns:expr, $($arg:tt)+) => {
        $logger.log(
            $severity,
            ::core::file!(),
            ::core::line!(),
            $ns,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Emits a TRACE record in the default namespace.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Trace, $crate::DEFAULT_NAMESPACE, $($arg)+)
    };
}

/// Emits a DEBUG record in the default namespace.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Debug, $crate::DEFAULT_NAMESPACE, $($arg)+)
    };
}

/// Emits an INFO record in the default namespace.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Info, $crate::DEFAULT_NAMESPACE, $($arg)+)
    };
}

/// Emits a WARN record in the default namespace.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Warn, $crate::DEFAULT_NAMESPACE, $($arg)+)
    };
}

/// Emits an ERROR record in the default namespace.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Error, $crate::DEFAULT_NAMESPACE, $($arg)+)
    };
}

/// Emits a FATAL record in the default namespace.
///
/// Logging at FATAL does not terminate the process.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Fatal, $crate::DEFAULT_NAMESPACE, $($arg)+)
    };
}

/// Emits a TRACE record in namespace `ns`.
///
/// # Example
/// ```
/// logging::sf_log_trace!("CURL", "header {}", "Accept");
/// ```
#[macro_export]
macro_rules! sf_log_trace {
    ($ns:expr, $($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Trace, $ns, $($arg)+)
    };
}

/// Emits a DEBUG record in namespace `ns`.
#[macro_export]
macro_rules! sf_log_debug {
    ($ns:expr, $($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Debug, $ns, $($arg)+)
    };
}

/// Emits an INFO record in namespace `ns`.
#[macro_export]
macro_rules! sf_log_info {
    ($ns:expr, $($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Info, $ns, $($arg)+)
    };
}

/// Emits a WARN record in namespace `ns`.
#[macro_export]
macro_rules! sf_log_warn {
    ($ns:expr, $($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Warn, $ns, $($arg)+)
    };
}

/// Emits an ERROR record in namespace `ns`.
#[macro_export]
macro_rules! sf_log_error {
    ($ns:expr, $($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Error, $ns, $($arg)+)
    };
}

/// Emits a FATAL record in namespace `ns`.
#[macro_export]
macro_rules! sf_log_fatal {
    ($ns:expr, $($arg:tt)+) => {
        $crate::sf_log!($crate::Severity::Fatal, $ns, $($arg)+)
    };
}
