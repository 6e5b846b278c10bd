//! crates/logging/src/error.rs
//! Errors surfaced by the configuration side of the logger.

use thiserror::Error;

/// Error returned by level mapping and configuration parsing.
///
/// Logging itself is infallible; only the configuration entry points that
/// accept untyped input report errors, and they do so before touching any
/// logger state.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LoggingError {
    /// A raw logging level value outside `0..=3`.
    #[error("Unknown logging level {value}")]
    InvalidLoggingLevel {
        /// The rejected value.
        value: i64,
    },
    /// A logging level name that is not one of `silent`, `verbose`, `info`, `debug`.
    #[error("unknown logging level name: {0}")]
    UnknownLoggingLevel(String),
    /// A severity name that does not match any [`Severity`](crate::Severity).
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
    /// A configuration token that is neither a level nor an extended-info switch.
    #[error("unknown logging option: {0}")]
    UnknownConfigToken(String),
}
