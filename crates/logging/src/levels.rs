//! crates/logging/src/levels.rs
//! Severity scale and name conversions.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;

/// Importance of a log record.
///
/// The scale is totally ordered with [`Severity::Trace`] lowest. A record is
/// emitted only when its severity is greater than or equal to the logger's
/// minimum level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Severity {
    /// Fine-grained tracing output.
    #[default]
    Trace = 0,
    /// Debugging detail.
    Debug = 1,
    /// Normal operational messages.
    Info = 2,
    /// Something unexpected that the caller recovered from.
    Warn = 3,
    /// An operation failed.
    Error = 4,
    /// An unrecoverable failure.
    Fatal = 5,
}

impl Severity {
    /// Every severity in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the 5-character, space-padded label used in rendered lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the ANSI SGR sequence that colours this severity's label.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Trace => "\x1b[94m",
            Self::Debug => "\x1b[36m",
            Self::Info => "\x1b[32m",
            Self::Warn => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Fatal => "\x1b[35m",
        }
    }

    /// Returns the numeric rank, `0` for TRACE through `5` for FATAL.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric rank back into a severity.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Parses a level name.
    ///
    /// Matching ignores ASCII case and surrounding whitespace. Anything other
    /// than the six canonical names is rejected; there is no implicit
    /// fallback. Use [`from_name_or`](Self::from_name_or) when a default is
    /// wanted instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::from_name("warn"), Ok(Severity::Warn));
    /// assert!(Severity::from_name("BOGUS").is_err());
    /// ```
    pub fn from_name(text: &str) -> Result<Self, ParseSeverityError> {
        let trimmed = text.trim();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSeverityError::new(text))
    }

    /// Parses a level name, returning `default` when it is not recognised.
    #[must_use]
    pub fn from_name_or(text: &str, default: Self) -> Self {
        Self::from_name(text).unwrap_or(default)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<u8> for Severity {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        Self::from_u8(value).ok_or(value)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

/// Converts an external level name into a [`Severity`].
///
/// Free-function form of [`Severity::from_name`] for translating configuration
/// values such as environment variables or connection options.
pub fn level_from_name(text: &str) -> Result<Severity, ParseSeverityError> {
    Severity::from_name(text)
}
