//! Configuration module

use std::path::Path;

use anyhow::{Context, Result};
use punkt_core::TrainerConfig;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Training thresholds
    #[serde(default)]
    pub trainer: TrainerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, the defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.trainer.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.trainer, TrainerConfig::default());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::from_toml(
            r#"
[trainer]
abbrev_threshold = 0.2
include_all_collocations = true

[output]
default_format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.trainer.abbrev_threshold, 0.2);
        assert!(config.trainer.include_all_collocations);
        assert_eq!(config.trainer.abbrev_backoff, 5);
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = CliConfig::from_toml("[performance]\nthreads = 4\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        assert!(CliConfig::from_toml("[trainer]\nabbrev_threshold = nan\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/punkt.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
