//! Configuration structures for the recur-scan system.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default fractional band for the amount-range features (±10%).
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Main configuration for the feature pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feature computation configuration.
    pub features: FeatureConfig,
}

impl Config {
    /// Parse a configuration from a JSON string.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        self.features.validate()
    }
}

/// Feature computation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Fractional band for "similar amount" (0.1 = ±10% of the target amount).
    pub tolerance: f64,
}

impl FeatureConfig {
    /// Create a feature configuration with the given tolerance.
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        let config = Self { tolerance };
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite tolerances.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() {
            return Err(Error::config(format!(
                "tolerance must be finite, got {}",
                self.tolerance
            )));
        }
        if self.tolerance < 0.0 {
            return Err(Error::config(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.features.tolerance, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json_str(r#"{"features": {"tolerance": 0.25}}"#).unwrap();
        assert_eq!(config.features.tolerance, 0.25);

        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        assert!(matches!(
            FeatureConfig::with_tolerance(-0.1),
            Err(Error::Config(_))
        ));
        assert!(FeatureConfig::with_tolerance(f64::NAN).is_err());
        assert!(FeatureConfig::with_tolerance(f64::INFINITY).is_err());
        assert!(Config::from_json_str(r#"{"features": {"tolerance": -1.0}}"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Config::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/recur-scan.json"),
            Err(Error::Io(_))
        ));
    }
}
