//! crates/logging/src/severity.rs
//! Syslog-numbered severity levels and the threshold comparison.

use crate::error::LoggingError;
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Variants carry their syslog priority number: lower values are more
/// urgent and less verbose. The derived ordering follows those numbers, so
/// `Severity::Emergency < Severity::Debug`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions; emitted by `log_fatal!`.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions. The default threshold.
    Warning = 4,
    /// Normal but significant conditions.
    Notice = 5,
    /// Informational progress.
    Info = 6,
    /// Debug-level detail.
    Debug = 7,
}

impl Severity {
    /// Every severity, most urgent first.
    pub const ALL: [Self; 8] = [
        Self::Emergency,
        Self::Alert,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the syslog priority number (0-7).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case severity name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "EMERGENCY",
            Self::Alert => "ALERT",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Converts a syslog priority number, returning `None` above 7.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns `true` when a message of `severity` passes `self` used as a
    /// threshold, i.e. when the message is at least as urgent.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Warning.allows(Severity::Error));
    /// assert!(Severity::Warning.allows(Severity::Warning));
    /// assert!(!Severity::Warning.allows(Severity::Notice));
    /// ```
    #[inline]
    pub const fn allows(self, severity: Self) -> bool {
        severity as u8 <= self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggingError;

    /// Parses a severity name case-insensitively. The short syslog spellings
    /// (`emerg`, `crit`, `err`, `warn`) are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergency" | "emerg" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" | "crit" => Ok(Self::Critical),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(LoggingError::UnknownSeverity(s.to_owned())),
        }
    }
}
