//! crates/logging/src/format.rs
//! Rendering of log records into fixed-column text lines.
//!
//! Every line has the shape
//!
//! ```text
//! <timestamp> <LEVEL> <NS   > <file            > <line>: <message>
//! ```
//!
//! with the level and namespace padded to 5 characters, the file name padded
//! and truncated to exactly 16 characters and the line number right-aligned
//! in 4 columns. The colour variant wraps the level in its SGR colour and
//! greys out the namespace, file and line columns. Rendering performs no I/O.

use std::fmt::{self, Write as _};

use time::OffsetDateTime;
use time::macros::format_description;

use crate::levels::Severity;

/// Width of the level column; see [`Severity::label`].
pub const LEVEL_WIDTH: usize = 5;
/// Minimum width of the namespace column.
pub const NAMESPACE_WIDTH: usize = 5;
/// Exact width of the file name column.
pub const FILE_WIDTH: usize = 16;
/// Minimum width of the line number column.
pub const LINE_WIDTH: usize = 4;

const RESET: &str = "\x1b[0m";
const GREY: &str = "\x1b[90m";
const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00.000";

/// One log call's worth of data.
///
/// Records borrow everything from the call site and live only for the
/// duration of a single entry-point call.
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    severity: Severity,
    file: &'a str,
    line: u32,
    namespace: &'a str,
    args: fmt::Arguments<'a>,
}

impl<'a> LogRecord<'a> {
    /// Builds a record. `file` should already be stripped of directories.
    #[must_use]
    pub const fn new(
        severity: Severity,
        file: &'a str,
        line: u32,
        namespace: &'a str,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            severity,
            file,
            line,
            namespace,
            args,
        }
    }

    /// Severity of the record.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Source file name.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Source line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Subsystem label.
    #[must_use]
    pub const fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Caller-supplied message arguments.
    #[must_use]
    pub const fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }
}

/// Strips any directory components from a source path.
///
/// Both `/` and `\` are treated as separators so paths produced by `file!()`
/// on any host reduce to the bare file name.
///
/// ```
/// assert_eq!(logging::file_name("src/net/conn.rs"), "conn.rs");
/// assert_eq!(logging::file_name(r"C:\work\client.c"), "client.c");
/// assert_eq!(logging::file_name("plain.c"), "plain.c");
/// ```
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Returns the current wall-clock time in the local offset.
///
/// Falls back to UTC when the local offset cannot be determined, which the
/// `time` crate reports on some multi-threaded Unix processes.
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Formats `timestamp` as `YYYY-MM-DD HH:MM:SS.mmm`.
#[must_use]
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
        ))
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}

/// Renders `record` using the current time.
#[must_use]
pub fn format_record(record: &LogRecord<'_>, color: bool) -> Vec<u8> {
    format_record_at(record, now(), color)
}

/// Renders `record` as if it were emitted at `timestamp`.
///
/// The output always ends with a single `\n`.
///
/// ```
/// use logging::{LogRecord, Severity, format_record_at};
/// use time::macros::datetime;
///
/// let y = 7;
/// let line = format_record_at(
///     &LogRecord::new(Severity::Info, "a.c", 11, "NS", format_args!("y={y}")),
///     datetime!(2024-01-02 03:04:05.006 UTC),
///     false,
/// );
/// assert_eq!(
///     String::from_utf8(line).unwrap(),
///     "2024-01-02 03:04:05.006 INFO  NS    a.c                11: y=7\n"
/// );
/// ```
#[must_use]
pub fn format_record_at(record: &LogRecord<'_>, timestamp: OffsetDateTime, color: bool) -> Vec<u8> {
    let mut line = String::with_capacity(96);
    // Only a failing Display impl in the caller's arguments can error here;
    // keep the partial line.
    if render_into(&mut line, record, &format_timestamp(timestamp), color).is_err() {
        line.push('\n');
    }
    line.into_bytes()
}

/// Appends the rendered line for `record` to `out`.
///
/// `timestamp` is written verbatim. Callers that manage their own buffers
/// can use this to avoid the allocation made by [`format_record_at`].
pub fn render_into(
    out: &mut String,
    record: &LogRecord<'_>,
    timestamp: &str,
    color: bool,
) -> fmt::Result {
    let severity = record.severity();
    if color {
        write!(
            out,
            "{timestamp} {sgr}{level}{RESET} {GREY}{ns:<NAMESPACE_WIDTH$} {file:<FILE_WIDTH$.FILE_WIDTH$} {line:>LINE_WIDTH$}:{RESET} ",
            sgr = severity.color(),
            level = severity.label(),
            ns = record.namespace(),
            file = record.file(),
            line = record.line(),
        )?;
    } else {
        write!(
            out,
            "{timestamp} {level} {ns:<NAMESPACE_WIDTH$} {file:<FILE_WIDTH$.FILE_WIDTH$} {line:>LINE_WIDTH$}: ",
            level = severity.label(),
            ns = record.namespace(),
            file = record.file(),
            line = record.line(),
        )?;
    }
    out.write_fmt(record.args())?;
    out.push('\n');
    Ok(())
}
