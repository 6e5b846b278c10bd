//! crates/logging/src/macros.rs
//! Call-site macros for each severity.
//!
//! Every macro checks [`Logger::fast_log_filter`](crate::Logger::fast_log_filter)
//! before anything else, so format arguments of suppressed statements are never
//! evaluated. A statement with arguments produces one record ending in a
//! newline; a statement without arguments produces one empty record.
//!
//! Each level macro accepts four forms:
//!
//! ```
//! use logging::{Logger, MemorySink};
//!
//! let local = Logger::new();
//! local.reset_backend(MemorySink::new(), MemorySink::new());
//!
//! logging::log_error!();
//! logging::log_error!("tree {} has no leaves", 7);
//! logging::log_error!(logger: &local);
//! logging::log_error!(logger: &local, "tree {} has no leaves", 7);
//! ```

/// Emits a record at an explicit severity and tag through `logger`.
///
/// ```
/// use logging::{Logger, MemorySink, Severity};
///
/// let logger = Logger::new();
/// let low = MemorySink::new();
/// logger.reset_backend(low.clone(), MemorySink::new());
///
/// logging::log_at!(&logger, Severity::Critical, "CRITICAL_INFO", "out of memory");
/// logging::log_at!(&logger, Severity::Debug, "DEBUG", "hidden");
///
/// assert_eq!(low.contents_lossy(), "out of memory\n");
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $tag:expr $(,)?) => {{
        let logger: &$crate::Logger = $logger;
        let severity: $crate::Severity = $severity;
        if logger.fast_log_filter(severity) {
            ::std::mem::drop(logger.entry(severity, $tag, $crate::source_location!()));
        }
    }};
    ($logger:expr, $severity:expr, $tag:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let severity: $crate::Severity = $severity;
        if logger.fast_log_filter(severity) {
            let mut entry = logger.entry(severity, $tag, $crate::source_location!());
            entry.write_line(::std::format_args!($($arg)+));
        }
    }};
}

/// Emits a critical record tagged `CRITICAL_INFO`.
///
/// This only logs; it does not abort the process.
#[macro_export]
macro_rules! log_fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Critical, "CRITICAL_INFO", $($arg)+)
    };
    (logger: $logger:expr $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Critical, "CRITICAL_INFO")
    };
    () => {
        $crate::log_at!($crate::logger(), $crate::Severity::Critical, "CRITICAL_INFO")
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logger(), $crate::Severity::Critical, "CRITICAL_INFO", $($arg)+)
    };
}

/// Emits an error record.
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, "ERROR", $($arg)+)
    };
    (logger: $logger:expr $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Error, "ERROR")
    };
    () => {
        $crate::log_at!($crate::logger(), $crate::Severity::Error, "ERROR")
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logger(), $crate::Severity::Error, "ERROR", $($arg)+)
    };
}

/// Emits a warning record.
#[macro_export]
macro_rules! log_warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warning, "WARNING", $($arg)+)
    };
    (logger: $logger:expr $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Warning, "WARNING")
    };
    () => {
        $crate::log_at!($crate::logger(), $crate::Severity::Warning, "WARNING")
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logger(), $crate::Severity::Warning, "WARNING", $($arg)+)
    };
}

/// Emits a notice record. Shown from [`LoggingLevel::Verbose`](crate::LoggingLevel::Verbose) up.
#[macro_export]
macro_rules! log_notice {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Notice, "NOTICE", $($arg)+)
    };
    (logger: $logger:expr $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Notice, "NOTICE")
    };
    () => {
        $crate::log_at!($crate::logger(), $crate::Severity::Notice, "NOTICE")
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logger(), $crate::Severity::Notice, "NOTICE", $($arg)+)
    };
}

/// Emits an informational record.
#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, "INFO", $($arg)+)
    };
    (logger: $logger:expr $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Info, "INFO")
    };
    () => {
        $crate::log_at!($crate::logger(), $crate::Severity::Info, "INFO")
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logger(), $crate::Severity::Info, "INFO", $($arg)+)
    };
}

/// Emits a debug record.
#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, "DEBUG", $($arg)+)
    };
    (logger: $logger:expr $(,)?) => {
        $crate::log_at!($logger, $crate::Severity::Debug, "DEBUG")
    };
    () => {
        $crate::log_at!($crate::logger(), $crate::Severity::Debug, "DEBUG")
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logger(), $crate::Severity::Debug, "DEBUG", $($arg)+)
    };
}
