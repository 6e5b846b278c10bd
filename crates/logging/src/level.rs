//! crates/logging/src/level.rs
//! Public verbosity levels and their mapping onto severity thresholds.

use crate::error::LoggingError;
use crate::severity::Severity;
use std::fmt;
use std::str::FromStr;

/// User-facing verbosity setting.
///
/// This is the knob a command-line tool exposes (`--logging-level`); it is
/// translated into the logger's [`Severity`] threshold by
/// [`severity`](Self::severity).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoggingLevel {
    /// Warnings and worse only.
    #[default]
    Silent = 0,
    /// Adds notices.
    Verbose = 1,
    /// Adds informational progress.
    Info = 2,
    /// Everything.
    Debug = 3,
}

impl LoggingLevel {
    /// Every level, quietest first.
    pub const ALL: [Self; 4] = [Self::Silent, Self::Verbose, Self::Info, Self::Debug];

    /// Threshold installed by this level.
    ///
    /// ```
    /// use logging::{LoggingLevel, Severity};
    ///
    /// assert_eq!(LoggingLevel::Silent.severity(), Severity::Warning);
    /// assert_eq!(LoggingLevel::Verbose.severity(), Severity::Notice);
    /// assert_eq!(LoggingLevel::Info.severity(), Severity::Info);
    /// assert_eq!(LoggingLevel::Debug.severity(), Severity::Debug);
    /// ```
    pub const fn severity(self) -> Severity {
        match self {
            Self::Silent => Severity::Warning,
            Self::Verbose => Severity::Notice,
            Self::Info => Severity::Info,
            Self::Debug => Severity::Debug,
        }
    }

    /// Canonical name as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "Silent",
            Self::Verbose => "Verbose",
            Self::Info => "Info",
            Self::Debug => "Debug",
        }
    }
}

impl TryFrom<i64> for LoggingLevel {
    type Error = LoggingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Silent),
            1 => Ok(Self::Verbose),
            2 => Ok(Self::Info),
            3 => Ok(Self::Debug),
            _ => Err(LoggingError::InvalidLoggingLevel { value }),
        }
    }
}

impl TryFrom<i32> for LoggingLevel {
    type Error = LoggingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<u8> for LoggingLevel {
    type Error = LoggingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggingLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "verbose" => Ok(Self::Verbose),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(LoggingError::UnknownLoggingLevel(s.to_owned())),
        }
    }
}
