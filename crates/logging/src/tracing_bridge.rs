//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into the logger.
//!
//! [`FacilityLayer`] is a `tracing-subscriber` layer that turns tracing
//! events into log records, so Rust code in the host can use the standard
//! `tracing` macros and still end up in the same sink, with the same
//! filtering and lock discipline, as every other call site.
//!
//! - Tracing levels map one-to-one onto [`Severity`] (tracing has no FATAL).
//! - The last `::` segment of the event target becomes the namespace.
//! - The event's file and line metadata become the record location.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//! tracing::warn!(target: "client::http", "retrying request");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::global::global;
use crate::levels::Severity;
use crate::logger::Logger;

enum Target {
    Global,
    Owned(Arc<Logger>),
}

/// A tracing layer that forwards events to a [`Logger`].
pub struct FacilityLayer {
    target: Target,
}

impl FacilityLayer {
    /// Creates a layer writing to the process-wide logger.
    #[must_use]
    pub const fn global() -> Self {
        Self {
            target: Target::Global,
        }
    }

    /// Creates a layer writing to `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self {
            target: Target::Owned(logger),
        }
    }

    fn logger(&self) -> &Logger {
        match &self.target {
            Target::Global => global(),
            Target::Owned(logger) => logger,
        }
    }

    /// Maps a tracing level onto a severity.
    const fn severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Trace,
        }
    }

    /// Reduces a tracing target to a namespace label.
    fn namespace(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }
}

impl fmt::Debug for FacilityLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match self.target {
            Target::Global => "global",
            Target::Owned(_) => "owned",
        };
        f.debug_struct("FacilityLayer")
            .field("target", &target)
            .finish()
    }
}

impl<S> Layer<S> for FacilityLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity(metadata.level());
        let logger = self.logger();
        if !logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        logger.log(
            severity,
            metadata.file().unwrap_or("?"),
            metadata.line().unwrap_or(0),
            Self::namespace(metadata.target()),
            format_args!("{}", visitor.finish()),
        );
    }
}

/// Collects the `message` field followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        if self.message.is_empty() {
            return self.fields;
        }
        if !self.fields.is_empty() {
            self.message.push(' ');
            self.message.push_str(&self.fields);
        }
        self.message
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs a [`FacilityLayer`] for the process-wide logger as the global
/// tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; use
/// [`try_init_tracing`] to handle that case.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(FacilityLayer::global())
        .init();
}

/// Fallible form of [`init_tracing`].
pub fn try_init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(FacilityLayer::global())
        .try_init()
}
