//! Configuration structures and validation
//!
//! This module defines the TOML schema for language variables. Every
//! section except `[metadata]` falls back to the English defaults, so a
//! language file only lists what it overrides.

use serde::{Deserialize, Serialize};

use crate::error::{PunktError, Result};

/// Root language configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub punctuation: Punctuation,
    #[serde(default)]
    pub patterns: Patterns,
}

/// Language metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Character classes used by word tokenization and boundary detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Punctuation {
    /// Characters that can end a sentence
    pub sentence_end: Vec<char>,
    /// Punctuation that never starts a sentence and signals a preceding abbreviation
    pub internal: Vec<char>,
    /// Characters that end a word and form tokens of their own
    pub non_word: Vec<char>,
    /// Characters that cannot begin a multi-character word token
    pub word_start_excluded: Vec<char>,
    /// Closing quotes and brackets reattached to the preceding sentence
    pub boundary_closers: Vec<char>,
}

/// Regex sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patterns {
    /// Multi-character punctuation kept as a single token (dashes, ellipses)
    pub multi_char_punct: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            metadata: Metadata {
                code: "en".to_string(),
                name: "English".to_string(),
            },
            punctuation: Punctuation::default(),
            patterns: Patterns::default(),
        }
    }
}

impl Default for Punctuation {
    fn default() -> Self {
        Self {
            sentence_end: vec!['.', '?', '!'],
            internal: vec![',', ':', ';'],
            non_word: vec![
                ')', '"', ';', '}', ']', '*', ':', '@', '\'', '(', '{', '[', '!', '?',
            ],
            word_start_excluded: vec![
                '(', '"', '`', '{', '[', ':', ';', '&', '#', '*', '@', ')', '}', ']', '-', ',',
            ],
            boundary_closers: vec!['"', '\'', ')', ']', '}'],
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            multi_char_punct: r"(?:\-{2,}|\.{2,}|(?:\.\s){2,}\.)".to_string(),
        }
    }
}

impl LanguageConfig {
    /// Parse a configuration from TOML source
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(source)
            .map_err(|e| PunktError::Configuration(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PunktError::Configuration(format!("failed to render TOML: {e}")))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(PunktError::Configuration(
                "language code must not be empty".to_string(),
            ));
        }

        if self.punctuation.sentence_end.is_empty() {
            return Err(PunktError::Configuration(
                "no sentence-ending characters defined".to_string(),
            ));
        }

        let classes = [
            ("sentence_end", &self.punctuation.sentence_end),
            ("internal", &self.punctuation.internal),
            ("non_word", &self.punctuation.non_word),
            ("word_start_excluded", &self.punctuation.word_start_excluded),
            ("boundary_closers", &self.punctuation.boundary_closers),
        ];
        for (name, chars) in classes {
            if let Some(ch) = chars.iter().find(|c| c.is_whitespace()) {
                return Err(PunktError::Configuration(format!(
                    "whitespace {ch:?} is not allowed in punctuation.{name}"
                )));
            }
        }

        if self.patterns.multi_char_punct.is_empty() {
            return Err(PunktError::Configuration(
                "patterns.multi_char_punct must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        let config = LanguageConfig::default();
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.punctuation.sentence_end, vec!['.', '?', '!']);
        assert_eq!(config.punctuation.internal, vec![',', ':', ';']);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config = LanguageConfig::from_toml(
            r#"
[metadata]
code = "xx"
name = "Test"

[punctuation]
sentence_end = [".", "!"]
"#,
        )
        .unwrap();

        assert_eq!(config.punctuation.sentence_end, vec!['.', '!']);
        assert_eq!(config.punctuation.internal, vec![',', ':', ';']);
        assert_eq!(config.patterns, Patterns::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LanguageConfig::default();
        let rendered = config.to_toml().unwrap();
        let parsed = LanguageConfig::from_toml(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_empty_sentence_end() {
        let result = LanguageConfig::from_toml(
            r#"
[metadata]
code = "xx"
name = "Test"

[punctuation]
sentence_end = []
"#,
        );
        assert!(matches!(result, Err(PunktError::Configuration(_))));
    }

    #[test]
    fn test_rejects_empty_code() {
        let result = LanguageConfig::from_toml(
            r#"
[metadata]
code = ""
name = "Test"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_whitespace_member() {
        let mut config = LanguageConfig::default();
        config.punctuation.internal.push(' ');
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("punctuation.internal"));
    }
}
