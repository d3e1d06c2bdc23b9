//! Trainer thresholds

use serde::{Deserialize, Serialize};

use crate::error::{PunktError, Result};

/// Numeric thresholds and collocation policy for training
///
/// Every field has a default, so a TOML table only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainerConfig {
    /// Minimum score for a type to be an abbreviation
    pub abbrev_threshold: f64,
    /// Types seen fewer times than this (with and without period) are
    /// candidates for the rare-abbreviation heuristic
    pub abbrev_backoff: u64,
    /// Minimum log-likelihood for a collocation
    pub collocation_threshold: f64,
    /// Minimum log-likelihood for a frequent sentence starter
    pub sent_starter_threshold: f64,
    /// A pair must occur more often than this to be a collocation
    pub min_colloc_freq: u64,
    /// Score abbreviations without the length penalty for bare occurrences
    pub ignore_abbrev_penalty: bool,
    /// Count every period-final word pair as a collocation candidate
    pub include_all_collocations: bool,
    /// Also count pairs whose first word is an abbreviation
    pub include_abbrev_collocations: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            abbrev_threshold: 0.3,
            abbrev_backoff: 5,
            collocation_threshold: 7.88,
            sent_starter_threshold: 30.0,
            min_colloc_freq: 1,
            ignore_abbrev_penalty: false,
            include_all_collocations: false,
            include_abbrev_collocations: false,
        }
    }
}

impl TrainerConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: TrainerConfig = toml::from_str(source)
            .map_err(|e| PunktError::Configuration(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("abbrev_threshold", self.abbrev_threshold),
            ("collocation_threshold", self.collocation_threshold),
            ("sent_starter_threshold", self.sent_starter_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(PunktError::Configuration(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn abbrev_threshold(mut self, threshold: f64) -> Self {
        self.abbrev_threshold = threshold;
        self
    }

    pub fn abbrev_backoff(mut self, backoff: u64) -> Self {
        self.abbrev_backoff = backoff;
        self
    }

    pub fn collocation_threshold(mut self, threshold: f64) -> Self {
        self.collocation_threshold = threshold;
        self
    }

    pub fn sent_starter_threshold(mut self, threshold: f64) -> Self {
        self.sent_starter_threshold = threshold;
        self
    }

    pub fn min_colloc_freq(mut self, freq: u64) -> Self {
        self.min_colloc_freq = freq;
        self
    }

    pub fn ignore_abbrev_penalty(mut self, ignore: bool) -> Self {
        self.ignore_abbrev_penalty = ignore;
        self
    }

    pub fn include_all_collocations(mut self, include: bool) -> Self {
        self.include_all_collocations = include;
        self
    }

    pub fn include_abbrev_collocations(mut self, include: bool) -> Self {
        self.include_abbrev_collocations = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.abbrev_threshold, 0.3);
        assert_eq!(config.abbrev_backoff, 5);
        assert_eq!(config.collocation_threshold, 7.88);
        assert_eq!(config.sent_starter_threshold, 30.0);
        assert_eq!(config.min_colloc_freq, 1);
        assert!(!config.include_all_collocations);
    }

    #[test]
    fn test_partial_toml() {
        let config = TrainerConfig::from_toml("abbrev_threshold = 0.1\ninclude_all_collocations = true").unwrap();
        assert_eq!(config.abbrev_threshold, 0.1);
        assert!(config.include_all_collocations);
        assert_eq!(config.abbrev_backoff, 5);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(TrainerConfig::from_toml("abbrev_treshold = 0.1").is_err());
    }

    #[test]
    fn test_builder() {
        let config = TrainerConfig::default()
            .abbrev_backoff(10)
            .min_colloc_freq(3)
            .ignore_abbrev_penalty(true);
        assert_eq!(config.abbrev_backoff, 10);
        assert_eq!(config.min_colloc_freq, 3);
        assert!(config.ignore_abbrev_penalty);
    }

    #[test]
    fn test_rejects_nan() {
        let config = TrainerConfig::default().abbrev_threshold(f64::NAN);
        assert!(config.validate().is_err());
    }
}
