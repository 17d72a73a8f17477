//! Engine configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```
//! use tattle_tracing::EngineConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{ "console_capacity": 32 }"#).unwrap();
//! assert_eq!(config.console_capacity, 32);
//! assert!(config.log_enabled);
//! ```

use serde::{Deserialize, Serialize};
use tattle_core::logger::LogKind;

/// Errors produced while loading an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not valid JSON or has unknown or mistyped keys.
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The developer console cannot hold zero entries.
    #[error("console_capacity must be at least 1")]
    ZeroConsoleCapacity,
}

/// Settings for a [`TracingEngine`](crate::TracingEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Reported by `is_debug_build`. Defaults to `cfg!(debug_assertions)`.
    pub debug_build: bool,
    /// Initial developer-console visibility.
    pub developer_console_visible: bool,
    /// Maximum number of entries the developer console keeps.
    pub console_capacity: usize,
    /// Initial state of the logger's enabled flag.
    pub log_enabled: bool,
    /// Initial logger filter.
    pub filter: LogKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debug_build: cfg!(debug_assertions),
            developer_console_visible: false,
            console_capacity: 256,
            log_enabled: true,
            filter: LogKind::Log,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, and
    /// [`ConfigError::ZeroConsoleCapacity`] if `console_capacity` is 0.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroConsoleCapacity`] if `console_capacity` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.console_capacity == 0 {
            return Err(ConfigError::ZeroConsoleCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn filter_parses_lowercase_kind() {
        let config = EngineConfig::from_json_str(r#"{ "filter": "warning" }"#).unwrap();
        assert_eq!(config.filter, LogKind::Warning);
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "console_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroConsoleCapacity));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "console_capacty": 8 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse engine config"));
    }

    #[test]
    fn roundtrips_through_json() {
        let config = EngineConfig {
            debug_build: true,
            developer_console_visible: true,
            console_capacity: 4,
            log_enabled: false,
            filter: LogKind::Error,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }
}
