//! Extractor configuration
//!
//! Validated configuration structures with explicit defaults. Required keys
//! are checked when the configuration is built, so a missing key fails at
//! initialization and never surfaces as a mid-extraction failure.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Error during configuration parsing or validation
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    #[error("Configuration key '{0}' must not be empty")]
    EmptyValue(&'static str),
}

/// Policy applied when the catalog fetch fails on first pull.
///
/// The default propagates the failure as a distinguishable error; degrading
/// to an empty catalog is available for pipelines that prefer an empty run
/// over a failed one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorPolicy {
    /// Surface the fetch failure to the orchestrator (default)
    #[default]
    Propagate,
    /// Log the failure and continue with an empty catalog
    DegradeToEmpty,
}

/// Configuration for the search-index extractor.
///
/// `cluster` and `schema` are required and must be non-empty; the remaining
/// keys carry explicit defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElasticsearchConfig {
    pub cluster: String,
    pub schema: String,
    /// Emit synthetic units rendered from index settings/aliases
    #[serde(default)]
    pub extract_technical_details: bool,
    #[serde(default)]
    pub on_fetch_error: FetchErrorPolicy,
}

impl ElasticsearchConfig {
    /// Create a configuration with default optional keys
    pub fn new(
        cluster: impl Into<String>,
        schema: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            cluster: cluster.into(),
            schema: schema.into(),
            extract_technical_details: false,
            on_fetch_error: FetchErrorPolicy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Enable or disable technical-detail extraction
    pub fn with_technical_details(mut self, enabled: bool) -> Self {
        self.extract_technical_details = enabled;
        self
    }

    /// Set the transport-failure policy for the catalog fetch
    pub fn with_fetch_error_policy(mut self, policy: FetchErrorPolicy) -> Self {
        self.on_fetch_error = policy;
        self
    }

    /// Build a configuration from a JSON value, validating required keys
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from YAML content, validating required keys
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file on disk
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Check that required keys are non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cluster.trim().is_empty() {
            return Err(ConfigError::EmptyValue("cluster"));
        }
        if self.schema.trim().is_empty() {
            return Err(ConfigError::EmptyValue("schema"));
        }
        Ok(())
    }
}
