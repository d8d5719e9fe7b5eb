//! # Demo Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PREMIUM_DEMO_*`)
//! 2. Defaults (this file)
//!
//! | Variable                | Values          | Default |
//! |-------------------------|-----------------|---------|
//! | `PREMIUM_DEMO_FORMAT`   | `text`, `json`  | `text`  |
//! | `PREMIUM_DEMO_SCENARIO` | scenario number | all     |
//!
//! Log filtering is separate and follows `RUST_LOG`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

pub const FORMAT_VAR: &str = "PREMIUM_DEMO_FORMAT";
pub const SCENARIO_VAR: &str = "PREMIUM_DEMO_SCENARIO";

/// Errors while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be one of: text, json (got '{value}')")]
    InvalidFormat { var: &'static str, value: String },

    #[error("{var} must be a positive scenario number (got '{value}')")]
    InvalidScenario { var: &'static str, value: String },
}

// =============================================================================
// Output Format
// =============================================================================

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable input / output / totals listing.
    #[default]
    Text,
    /// One JSON document covering every scenario run.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat {
                var: FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// =============================================================================
// Demo Config
// =============================================================================

/// Demo configuration, read-only after startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub format: OutputFormat,
    /// Run only this scenario (1-based). `None` runs all of them.
    pub scenario: Option<usize>,
}

impl DemoConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = DemoConfig::default();

        if let Some(value) = non_blank(lookup(FORMAT_VAR)) {
            config.format = value.parse()?;
        }

        if let Some(value) = non_blank(lookup(SCENARIO_VAR)) {
            let number = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidScenario {
                    var: SCENARIO_VAR,
                    value: value.clone(),
                })?;
            config.scenario = Some(number);
        }

        debug!(format = %config.format, scenario = ?config.scenario, "Configuration loaded");
        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.scenario, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = load(&[(FORMAT_VAR, "JSON"), (SCENARIO_VAR, " 7 ")]).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.scenario, Some(7));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = load(&[(FORMAT_VAR, "  "), (SCENARIO_VAR, "")]).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[(FORMAT_VAR, "yaml")]),
            Err(ConfigError::InvalidFormat { .. })
        ));
        assert!(matches!(
            load(&[(SCENARIO_VAR, "0")]),
            Err(ConfigError::InvalidScenario { .. })
        ));
        assert!(matches!(
            load(&[(SCENARIO_VAR, "two")]),
            Err(ConfigError::InvalidScenario { .. })
        ));
    }
}
