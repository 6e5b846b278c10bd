//! crates/logging/src/backend.rs
//! Low/high priority sink pairs owned by a logger.

use logging_sink::{LogSink, WriterSink};
use std::fmt;

/// A low-priority sink plus an optional high-priority sink.
///
/// Every routed record goes to the low sink. Records whose severity passes
/// the logger's high-priority cut-off are written to the high sink as well.
/// Which physical destinations the two slots name is up to whoever installs
/// the pair.
pub struct Backend {
    low: Box<dyn LogSink>,
    high: Option<Box<dyn LogSink>>,
}

impl Backend {
    /// Pair with both slots populated.
    pub fn new<L, H>(low: L, high: H) -> Self
    where
        L: LogSink + 'static,
        H: LogSink + 'static,
    {
        Self {
            low: Box::new(low),
            high: Some(Box::new(high)),
        }
    }

    /// Pair with only a low-priority sink.
    pub fn low_only<L>(low: L) -> Self
    where
        L: LogSink + 'static,
    {
        Self {
            low: Box::new(low),
            high: None,
        }
    }

    /// Process default: everything to standard error, no separate high sink
    /// so high-priority lines are not printed twice on the same stream.
    pub fn stderr() -> Self {
        Self::low_only(WriterSink::stderr())
    }

    /// Returns `true` when a high-priority sink is installed.
    pub const fn has_high(&self) -> bool {
        self.high.is_some()
    }

    /// Writes `bytes` and returns the number of failed sink writes.
    pub(crate) fn write(&self, bytes: &[u8], high_priority: bool) -> u64 {
        let mut failures = u64::from(self.low.write(bytes).is_err());
        if high_priority {
            if let Some(high) = &self.high {
                failures += u64::from(high.write(bytes).is_err());
            }
        }
        failures
    }

    /// Flushes both sinks and returns the number of failures.
    pub(crate) fn flush(&self) -> u64 {
        let mut failures = u64::from(self.low.flush().is_err());
        if let Some(high) = &self.high {
            failures += u64::from(high.flush().is_err());
        }
        failures
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("has_high", &self.has_high())
            .finish_non_exhaustive()
    }
}
