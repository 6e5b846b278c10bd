#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a process-wide, severity-filtered logger. Call sites use the
//! level macros ([`log_error!`], [`log_info!`], ...) which check a cheap
//! filter, build a [`LogEntry`] for the statement, and hand the finished
//! record to the shared [`Logger`] when the entry goes out of scope. The
//! logger routes records to a pair of [`LogSink`]s, or to a separate trace
//! pair while trace mode is on.
//!
//! # Design
//!
//! - [`Severity`] follows syslog numbering; a lower number is more urgent.
//!   [`LoggingLevel`] is the coarse user-facing knob that selects a
//!   threshold.
//! - [`Logger`] keeps its threshold and flags in relaxed atomics so
//!   [`Logger::fast_log_filter`] never takes a lock. Sinks sit behind a
//!   read-write lock and are replaced through the `reset_*` operations.
//! - Each pair has a low sink that receives every record and an optional
//!   high sink that additionally receives records at or above the
//!   high-priority cut-off ([`Severity::Warning`] by default).
//! - The process-wide instance is created on first use by [`logger()`];
//!   the free functions in this crate forward to it.
//! - With the `tracing` feature, [`LoggerLayer`] forwards `tracing` events
//!   into a logger.
//!
//! # Invariants
//!
//! - A constructed [`LogEntry`] is delivered exactly once, when dropped.
//! - Records carry a metadata header only while extended info is requested
//!   or trace mode is on.
//! - Logging never fails at the call site; sink errors are counted in
//!   [`Logger::write_failures`].
//! - Invalid configuration input is rejected before any state changes.
//!
//! # Examples
//!
//! ```
//! use logging::{Logger, LoggingLevel, MemorySink};
//!
//! let logger = Logger::new();
//! let low = MemorySink::new();
//! let high = MemorySink::new();
//! logger.reset_backend(low.clone(), high.clone());
//! logger.set_logging_level(LoggingLevel::Verbose);
//!
//! logging::log_notice!(logger: &logger, "iteration {}", 100);
//! logging::log_error!(logger: &logger, "learning rate is negative");
//! logging::log_info!(logger: &logger, "not shown at this level");
//!
//! assert_eq!(
//!     low.contents_lossy(),
//!     "iteration 100\nlearning rate is negative\n"
//! );
//! assert_eq!(high.contents_lossy(), "learning rate is negative\n");
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the sink trait and stock sinks.

mod backend;
mod config;
mod entry;
mod error;
mod level;
mod location;
mod logger;
mod macros;
mod registry;
mod severity;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use backend::Backend;
pub use config::LoggingConfig;
pub use entry::LogEntry;
pub use error::LoggingError;
pub use level::LoggingLevel;
pub use location::SourceLocation;
pub use logger::Logger;
pub use registry::{
    fast_log_filter, flush, logger, reset_backend, reset_trace_backend, restore_default_backend,
    restore_original_logger, set_custom_logging_function, set_extended_info, set_logging_level,
    set_silent_mode, set_verbose_mode, try_set_logging_level,
};
pub use severity::Severity;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter, try_init_tracing};

pub use logging_sink::{
    CustomLoggingFunction, FnSink, LineMode, LogSink, MemorySink, NullSink, WriterSink,
};
