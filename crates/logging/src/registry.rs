//! crates/logging/src/registry.rs
//! Process-wide logger instance and the free-function configuration surface.
//!
//! The shared [`Logger`] is created on first use and lives until process
//! exit. Every function in this module forwards to it; they exist so
//! command-line front ends and embedders can configure logging without
//! holding a reference.

use crate::error::LoggingError;
use crate::level::LoggingLevel;
use crate::logger::Logger;
use crate::severity::Severity;
use logging_sink::LogSink;
use std::sync::OnceLock;

/// Returns the process-wide logger, creating it with the standard-error
/// backend on first call.
pub fn logger() -> &'static Logger {
    static LOGGER: OnceLock<Logger> = OnceLock::new();
    LOGGER.get_or_init(Logger::new)
}

/// Returns `true` when a statement of `severity` would be emitted.
#[inline]
pub fn fast_log_filter(severity: Severity) -> bool {
    logger().fast_log_filter(severity)
}

/// Installs the threshold for `level`.
pub fn set_logging_level(level: LoggingLevel) {
    logger().set_logging_level(level);
}

/// Validates and installs a raw logging level.
///
/// ```
/// use logging::LoggingError;
///
/// assert_eq!(
///     logging::try_set_logging_level(12_i64),
///     Err(LoggingError::InvalidLoggingLevel { value: 12 })
/// );
/// ```
pub fn try_set_logging_level<T>(raw: T) -> Result<(), LoggingError>
where
    LoggingLevel: TryFrom<T, Error = LoggingError>,
{
    logger().try_set_logging_level(raw)
}

/// Warnings and worse only.
pub fn set_silent_mode() {
    logger().set_silent_mode();
}

/// Everything, including debug output.
pub fn set_verbose_mode() {
    logger().set_verbose_mode();
}

/// Enables or disables the metadata header.
pub fn set_extended_info(value: bool) {
    logger().set_output_extended_info(value);
}

/// Replaces the shared logger's normal sink pair.
pub fn reset_backend<L, H>(low: L, high: H)
where
    L: LogSink + 'static,
    H: LogSink + 'static,
{
    logger().reset_backend(low, high);
}

/// Installs or removes the shared logger's trace sink.
pub fn reset_trace_backend(low: Option<Box<dyn LogSink>>) {
    logger().reset_trace_backend(low);
}

/// Reinstalls standard error and removes any trace sink.
pub fn restore_default_backend() {
    logger().restore_default_backend();
}

/// Routes the shared logger's output to two callbacks.
pub fn set_custom_logging_function<L, H>(low: L, high: H)
where
    L: Fn(&[u8]) + Send + Sync + 'static,
    H: Fn(&[u8]) + Send + Sync + 'static,
{
    logger().set_custom_logging_function(low, high);
}

/// Reverses [`set_custom_logging_function`].
pub fn restore_original_logger() {
    logger().restore_original_logger();
}

/// Flushes every sink installed on the shared logger.
///
/// The shared logger is never dropped, so callers that install buffering
/// sinks of their own should call this before exiting.
pub fn flush() {
    logger().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_is_a_singleton() {
        assert!(std::ptr::eq(logger(), logger()));
    }

    #[test]
    fn concurrent_first_use_yields_one_instance() {
        let addresses: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| std::ptr::from_ref(logger()) as usize))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
