//! crates/logging/src/error.rs
//! Errors surfaced by level parsing and configuration loading.
//!
//! Emitting a record never produces an error; sink failures are absorbed by
//! the entry point. Only translating external configuration can fail.

use thiserror::Error;

/// Error returned when a level name is not one of the canonical severities.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid log level name '{name}': expected one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL")]
pub struct ParseSeverityError {
    name: String,
}

impl ParseSeverityError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the text that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Error returned when logger configuration cannot be interpreted.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A level setting did not name a known severity.
    #[error("{key}: {source}")]
    Level {
        /// Configuration key that carried the value.
        key: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseSeverityError,
    },
    /// A flag setting was not a recognised boolean spelling.
    #[error("{key}: expected one of 1, 0, true, false, yes, no, on, off; found '{value}'")]
    Flag {
        /// Configuration key that carried the value.
        key: &'static str,
        /// The rejected text.
        value: String,
    },
    /// A colour setting was not `auto`, `always` or `never`.
    #[error("{key}: expected one of auto, always, never; found '{value}'")]
    Color {
        /// Configuration key that carried the value.
        key: &'static str,
        /// The rejected text.
        value: String,
    },
}
