//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`Logger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that turns tracing events
//! into log entries, so libraries instrumented with `tracing` share the
//! logger's threshold, trace mode and sinks.
//!
//! - `ERROR` maps to [`Severity::Error`], `WARN` to [`Severity::Warning`],
//!   `INFO` to [`Severity::Info`], and both `DEBUG` and `TRACE` to
//!   [`Severity::Debug`].
//! - The severity filter runs before any field is visited.
//! - The event target becomes the entry tag; the message comes first,
//!   followed by the remaining fields as `key=value`.
//!
//! ```rust,ignore
//! logging::set_verbose_mode();
//! logging::init_tracing();
//!
//! tracing::info!(target: "train", iteration = 10, "loss improved");
//! ```

use crate::location::SourceLocation;
use crate::logger::Logger;
use crate::registry;
use crate::severity::Severity;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that forwards events to a [`Logger`].
#[derive(Clone, Copy, Debug)]
pub struct LoggerLayer {
    logger: &'static Logger,
}

impl LoggerLayer {
    /// Layer writing to `logger`.
    #[must_use]
    pub const fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }

    /// Layer writing to the process-wide logger.
    #[must_use]
    pub fn global() -> Self {
        Self::new(registry::logger())
    }

    /// Map a tracing level onto a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl Default for LoggerLayer {
    fn default() -> Self {
        Self::global()
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());
        if !self.logger.fast_log_filter(severity) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let location = SourceLocation::new(
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
            metadata.module_path().unwrap_or(""),
        );
        let mut entry = self.logger.entry(severity, metadata.target(), location);
        entry.append_str(&visitor.message);
        entry.append_str(&visitor.fields);
        entry.append_str("\n");
    }
}

/// Collects the message and remaining fields of an event.
#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: String,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs a global tracing subscriber that forwards to the process-wide
/// logger.
///
/// # Panics
///
/// Panics if a global default subscriber is already set. Use
/// [`try_init_tracing`] to handle that case.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::global())
        .init();
}

/// Like [`init_tracing`], reporting an already-installed subscriber as an
/// error.
pub fn try_init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::global())
        .try_init()
}

/// Installs the bridge behind an additional filter layer, for example an
/// `EnvFilter`.
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::global())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::MemorySink;
    use tracing_subscriber::layer::SubscriberExt;

    fn leaked_logger() -> (&'static Logger, MemorySink) {
        let logger: &'static Logger = Box::leak(Box::new(Logger::new()));
        let low = MemorySink::new();
        logger.reset_backend(low.clone(), MemorySink::new());
        (logger, low)
    }

    fn with_layer(logger: &'static Logger, body: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));
        tracing::subscriber::with_default(subscriber, body);
    }

    #[test]
    fn test_level_to_severity() {
        assert_eq!(LoggerLayer::level_to_severity(&Level::ERROR), Severity::Error);
        assert_eq!(LoggerLayer::level_to_severity(&Level::WARN), Severity::Warning);
        assert_eq!(LoggerLayer::level_to_severity(&Level::INFO), Severity::Info);
        assert_eq!(LoggerLayer::level_to_severity(&Level::DEBUG), Severity::Debug);
        assert_eq!(LoggerLayer::level_to_severity(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn events_below_threshold_are_dropped() {
        let (logger, low) = leaked_logger();
        with_layer(logger, || {
            tracing::info!("hidden");
            tracing::warn!("shown");
        });
        assert_eq!(low.contents_lossy(), "shown\n");
    }

    #[test]
    fn fields_follow_message() {
        let (logger, low) = leaked_logger();
        with_layer(logger, || {
            tracing::error!(iteration = 7, metric = "rmse", "diverged");
        });
        assert_eq!(low.contents_lossy(), "diverged iteration=7 metric=rmse\n");
    }

    #[test]
    fn target_becomes_tag() {
        let (logger, low) = leaked_logger();
        logger.set_output_extended_info(true);
        with_layer(logger, || {
            tracing::error!(target: "fit", "bad split");
        });
        let text = low.contents_lossy();
        assert!(text.starts_with("fit [ERROR] "), "{text:?}");
        assert!(text.ends_with(": bad split\n"), "{text:?}");
    }

    #[test]
    fn trace_mode_lets_trace_events_through() {
        let (logger, _low) = leaked_logger();
        let trace = MemorySink::new();
        logger.reset_trace_backend(Some(Box::new(trace.clone())));
        with_layer(logger, || {
            tracing::trace!("step");
        });
        assert!(trace.contents_lossy().ends_with("step\n"));
    }
}
