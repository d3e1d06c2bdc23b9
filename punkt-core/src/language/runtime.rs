//! Runtime implementation of language variables
//!
//! This module bridges the TOML configuration and the [`LanguageVars`]
//! trait used by the trainer and classifier.

use std::path::Path;

use regex::Regex;

use crate::error::{PunktError, Result};
use crate::language::{config::LanguageConfig, interface::LanguageVars, tables::CharTable};

/// Configurable language variables
#[derive(Debug, Clone)]
pub struct ConfigurableLanguageVars {
    code: String,
    name: String,

    sent_end: CharTable,
    internal: CharTable,
    non_word: CharTable,
    word_start_excluded: CharTable,
    closers: CharTable,
    /// Anchored multi-character punctuation pattern
    multi_char_punct: Regex,
}

impl ConfigurableLanguageVars {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let punct = &config.punctuation;
        let multi_char_punct = Regex::new(&format!("^(?:{})", config.patterns.multi_char_punct))?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            sent_end: CharTable::new(punct.sentence_end.iter().copied()),
            internal: CharTable::new(punct.internal.iter().copied()),
            non_word: CharTable::new(punct.non_word.iter().copied()),
            word_start_excluded: CharTable::new(punct.word_start_excluded.iter().copied()),
            closers: CharTable::new(punct.boundary_closers.iter().copied()),
            multi_char_punct,
        })
    }

    /// Load from an external TOML file, optionally overriding its language code
    pub fn from_file(path: &Path, language_code: Option<&str>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PunktError::Configuration(format!("failed to read '{}': {e}", path.display()))
        })?;

        let mut config = LanguageConfig::from_toml(&content).map_err(|e| {
            PunktError::Configuration(format!("in '{}': {e}", path.display()))
        })?;

        if let Some(code) = language_code {
            config.metadata.code = code.to_string();
        }

        Self::from_config(&config)
    }

    pub fn language_name(&self) -> &str {
        &self.name
    }

    /// Configured sentence-ending characters
    pub fn sentence_end_chars(&self) -> &[char] {
        self.sent_end.chars()
    }

    /// Configured sentence-internal punctuation
    pub fn internal_punctuation(&self) -> &[char] {
        self.internal.chars()
    }
}

impl LanguageVars for ConfigurableLanguageVars {
    fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    fn is_sent_end_char(&self, ch: char) -> bool {
        self.sent_end.contains(ch)
    }

    #[inline]
    fn is_internal_punctuation(&self, ch: char) -> bool {
        self.internal.contains(ch)
    }

    #[inline]
    fn is_non_word_char(&self, ch: char) -> bool {
        self.non_word.contains(ch)
    }

    #[inline]
    fn can_start_word(&self, ch: char) -> bool {
        !ch.is_whitespace() && !self.word_start_excluded.contains(ch)
    }

    #[inline]
    fn is_boundary_closer(&self, ch: char) -> bool {
        self.closers.contains(ch)
    }

    fn multi_char_punct_at(&self, text: &str) -> Option<usize> {
        self.multi_char_punct.find(text).map(|m| m.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_default_config() {
        let vars = ConfigurableLanguageVars::from_config(&LanguageConfig::default()).unwrap();
        assert_eq!(vars.code(), "en");
        assert_eq!(vars.language_name(), "English");
        assert!(vars.is_sent_end_char('.'));
        assert!(vars.is_internal_punctuation(';'));
        assert!(!vars.can_start_word('('));
        assert!(vars.can_start_word('a'));
        assert_eq!(vars.multi_char_punct_at("...x"), Some(3));
        assert_eq!(vars.multi_char_punct_at("x..."), None);
    }

    #[test]
    fn test_punctuation_tokens() {
        let vars = ConfigurableLanguageVars::from_config(&LanguageConfig::default()).unwrap();
        for tok in [";", ":", ",", ".", "!", "?"] {
            assert!(vars.is_punctuation_token(tok), "{tok}");
        }
        assert!(!vars.is_punctuation_token(".."));
        assert!(!vars.is_punctuation_token("a"));
        assert!(!vars.is_punctuation_token(""));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let mut config = LanguageConfig::default();
        config.patterns.multi_char_punct = "(unclosed".to_string();
        let err = ConfigurableLanguageVars::from_config(&config).unwrap_err();
        assert!(matches!(err, PunktError::Regex(_)));
    }

    #[test]
    fn test_from_file_with_code_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
code = "xx"
name = "Exclamatory"

[punctuation]
sentence_end = ["!"]
"#
        )
        .unwrap();

        let vars = ConfigurableLanguageVars::from_file(file.path(), Some("yy")).unwrap();
        assert_eq!(vars.code(), "yy");
        assert!(vars.is_sent_end_char('!'));
        assert!(!vars.is_sent_end_char('.'));
    }

    #[test]
    fn test_from_missing_file() {
        let err = ConfigurableLanguageVars::from_file(Path::new("/nonexistent.toml"), None)
            .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
