//! crates/logging/src/config.rs
//! Logger configuration and its environment-variable loader.

use std::fmt;

use crate::error::ConfigError;
use crate::levels::Severity;
use crate::logger::Logger;

/// Environment variable naming the minimum severity.
pub const LEVEL_ENV: &str = "NATIVE_LOG_LEVEL";
/// Environment variable enabling quiet mode.
pub const QUIET_ENV: &str = "NATIVE_LOG_QUIET";
/// Environment variable selecting colour output.
pub const COLOR_ENV: &str = "NATIVE_LOG_COLOR";

/// When rendered lines carry ANSI colour codes.
///
/// The choice is resolved against the sink once, when the output is
/// installed or the choice changes, and cached for subsequent records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorChoice {
    /// Colour only when the sink is an interactive terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

impl ColorChoice {
    /// Resolves the choice for a sink with the given terminal status.
    #[must_use]
    pub const fn resolve(self, sink_is_terminal: bool) -> bool {
        match self {
            Self::Auto => sink_is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Parses `auto`, `always` or `never`, ignoring ASCII case.
    #[must_use]
    pub fn from_name(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// Returns the lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settle-once logger configuration.
///
/// The defaults emit everything (`TRACE`), are not quiet, and colour only on
/// terminals.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Minimum severity that is written.
    pub level: Severity,
    /// Suppress all output regardless of level.
    pub quiet: bool,
    /// Colour policy.
    pub color: ColorChoice,
}

impl LoggerConfig {
    /// Reads [`LEVEL_ENV`], [`QUIET_ENV`] and [`COLOR_ENV`] from the process
    /// environment. Unset or empty variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// ```
    /// use logging::{LoggerConfig, Severity};
    ///
    /// let config = LoggerConfig::from_lookup(|key| match key {
    ///     "NATIVE_LOG_LEVEL" => Some("warn".to_owned()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.level, Severity::Warn);
    /// assert!(!config.quiet);
    /// # Ok::<(), logging::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut value = |key: &str| lookup(key).filter(|text| !text.trim().is_empty());

        if let Some(text) = value(LEVEL_ENV) {
            config.level = Severity::from_name(&text).map_err(|source| ConfigError::Level {
                key: LEVEL_ENV,
                source,
            })?;
        }

        if let Some(text) = value(QUIET_ENV) {
            config.quiet = parse_flag(QUIET_ENV, &text)?;
        }

        if let Some(text) = value(COLOR_ENV) {
            config.color = ColorChoice::from_name(&text).ok_or(ConfigError::Color {
                key: COLOR_ENV,
                value: text,
            })?;
        }

        Ok(config)
    }

    /// Pushes this configuration into `logger`.
    pub fn apply(&self, logger: &Logger) {
        logger.set_level(self.level);
        logger.set_quiet(self.quiet);
        logger.set_color(self.color);
    }
}

fn parse_flag(key: &'static str, text: &str) -> Result<bool, ConfigError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag {
            key,
            value: text.to_owned(),
        }),
    }
}
