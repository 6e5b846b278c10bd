//! Serialization tests for logging configuration types.

#![cfg(feature = "serde")]

use logging::{LoggingConfig, LoggingLevel, Severity};

// ============================================================================
// LoggingConfig Tests
// ============================================================================

/// Verifies a configuration survives a JSON round trip.
#[test]
fn config_json_round_trip() {
    let config = LoggingConfig::new(LoggingLevel::Info, true);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"level":"Info","extended_info":true}"#);
    assert_eq!(serde_json::from_str::<LoggingConfig>(&json).unwrap(), config);
}

/// Verifies missing fields fall back to defaults.
#[test]
fn config_fields_default_when_missing() {
    let config: LoggingConfig = serde_json::from_str(r#"{"level":"Debug"}"#).unwrap();
    assert_eq!(config, LoggingConfig::new(LoggingLevel::Debug, false));
    assert_eq!(
        serde_json::from_str::<LoggingConfig>("{}").unwrap(),
        LoggingConfig::default()
    );
}

/// Verifies unknown level names are rejected.
#[test]
fn config_rejects_unknown_level() {
    assert!(serde_json::from_str::<LoggingConfig>(r#"{"level":"Loud"}"#).is_err());
}

// ============================================================================
// Severity Tests
// ============================================================================

/// Verifies severities serialize as lower-case names.
#[test]
fn severity_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Severity::Notice).unwrap(), r#""notice""#);
    assert_eq!(
        serde_json::from_str::<Severity>(r#""critical""#).unwrap(),
        Severity::Critical
    );
}
