//! crates/logging/src/config.rs
//! Logging configuration assembled from command-line style input.

use crate::error::LoggingError;
use crate::level::LoggingLevel;
use crate::logger::Logger;
use crate::registry;
use std::str::FromStr;

/// Level and header settings applied to a [`Logger`] in one call.
///
/// Front ends build this from a `-v` count or a comma-separated option
/// string and then [`apply`](Self::apply) it.
///
/// ```
/// use logging::{Logger, LoggingConfig, LoggingLevel, Severity};
///
/// let config: LoggingConfig = "info,extended".parse().unwrap();
/// assert_eq!(config.level, LoggingLevel::Info);
///
/// let logger = Logger::new();
/// config.apply(&logger);
/// assert_eq!(logger.severity(), Severity::Info);
/// assert!(logger.output_extended_info());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    /// Verbosity level.
    pub level: LoggingLevel,
    /// Whether records carry the metadata header.
    pub extended_info: bool,
}

impl LoggingConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub const fn new(level: LoggingLevel, extended_info: bool) -> Self {
        Self {
            level,
            extended_info,
        }
    }

    /// Maps the number of `-v` flags onto a level, saturating at
    /// [`LoggingLevel::Debug`].
    #[must_use]
    pub const fn from_verbose_count(count: u8) -> Self {
        let level = match count {
            0 => LoggingLevel::Silent,
            1 => LoggingLevel::Verbose,
            2 => LoggingLevel::Info,
            _ => LoggingLevel::Debug,
        };
        Self::new(level, false)
    }

    /// Applies a single option token.
    ///
    /// Level names (`silent` or `quiet`, `verbose`, `info`, `debug`) replace
    /// the level; `extended` and `no-extended` toggle the header. Matching is
    /// case-insensitive. On error the configuration is unchanged.
    pub fn apply_token(&mut self, token: &str) -> Result<(), LoggingError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "quiet" | "silent" => self.level = LoggingLevel::Silent,
            "verbose" => self.level = LoggingLevel::Verbose,
            "info" => self.level = LoggingLevel::Info,
            "debug" => self.level = LoggingLevel::Debug,
            "extended" => self.extended_info = true,
            "no-extended" => self.extended_info = false,
            _ => return Err(LoggingError::UnknownConfigToken(token.to_owned())),
        }
        Ok(())
    }

    /// Installs the level and header setting on `logger`.
    pub fn apply(&self, logger: &Logger) {
        logger.set_logging_level(self.level);
        logger.set_output_extended_info(self.extended_info);
    }

    /// Installs the configuration on the process-wide logger.
    pub fn apply_global(&self) {
        self.apply(registry::logger());
    }
}

impl FromStr for LoggingConfig {
    type Err = LoggingError;

    /// Parses comma-separated tokens, later tokens overriding earlier ones.
    /// Empty segments are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Self::default();
        for token in s.split(',').filter(|token| !token.trim().is_empty()) {
            config.apply_token(token)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn verbose_count_mapping() {
        let levels: Vec<_> = (0..=5)
            .map(|count| LoggingConfig::from_verbose_count(count).level)
            .collect();
        assert_eq!(
            levels,
            [
                LoggingLevel::Silent,
                LoggingLevel::Verbose,
                LoggingLevel::Info,
                LoggingLevel::Debug,
                LoggingLevel::Debug,
                LoggingLevel::Debug,
            ]
        );
    }

    #[test]
    fn tokens_update_fields() {
        let mut config = LoggingConfig::default();
        config.apply_token("Debug").unwrap();
        config.apply_token(" extended ").unwrap();
        assert_eq!(config, LoggingConfig::new(LoggingLevel::Debug, true));

        config.apply_token("quiet").unwrap();
        config.apply_token("no-extended").unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn unknown_token_leaves_config_unchanged() {
        let mut config = LoggingConfig::new(LoggingLevel::Info, true);
        assert_eq!(
            config.apply_token("colour"),
            Err(LoggingError::UnknownConfigToken("colour".to_owned()))
        );
        assert_eq!(config, LoggingConfig::new(LoggingLevel::Info, true));
    }

    #[test]
    fn parse_is_ordered_and_skips_blanks() {
        let config: LoggingConfig = "debug,,verbose, extended".parse().unwrap();
        assert_eq!(config, LoggingConfig::new(LoggingLevel::Verbose, true));
        assert_eq!("".parse::<LoggingConfig>(), Ok(LoggingConfig::default()));
        assert!("info,loud".parse::<LoggingConfig>().is_err());
    }

    #[test]
    fn apply_sets_threshold_and_header() {
        let logger = Logger::new();
        LoggingConfig::new(LoggingLevel::Verbose, true).apply(&logger);
        assert_eq!(logger.severity(), Severity::Notice);
        assert!(logger.output_extended_info());

        LoggingConfig::default().apply(&logger);
        assert_eq!(logger.severity(), Severity::Warning);
        assert!(!logger.output_extended_info());
    }
}
