//! Language source management for CLI

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use punkt_core::{get_language, ConfigurableLanguageVars, LanguageVars};

/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// English punctuation
    English,
    /// Greek punctuation (`;` ends questions)
    Greek,
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Greek => "Greek",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Greek => "el",
        }
    }
}

/// Command-line options selecting the language variables
#[derive(Debug, Clone, Args)]
pub struct LanguageArgs {
    /// Built-in language
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: Language,

    /// External language configuration file (overrides --language)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Language code to use with --language-config
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,
}

impl Default for LanguageArgs {
    fn default() -> Self {
        Self {
            language: Language::English,
            language_config: None,
            language_code: None,
        }
    }
}

impl LanguageArgs {
    pub fn source(&self) -> LanguageSource {
        match &self.language_config {
            Some(path) => LanguageSource::External {
                path: path.clone(),
                language_code: self.language_code.clone(),
            },
            None => LanguageSource::BuiltIn(self.language),
        }
    }
}

/// Source of language variables
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Embedded configuration
    BuiltIn(Language),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External {
                path,
                language_code,
            } => {
                if let Some(code) = language_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }

    /// Load the language variables
    pub fn resolve(&self) -> Result<Arc<dyn LanguageVars>> {
        log::debug!("Using language {}", self.display_name());
        match self {
            LanguageSource::BuiltIn(lang) => Ok(get_language(lang.code())?),
            LanguageSource::External {
                path,
                language_code,
            } => {
                let vars = ConfigurableLanguageVars::from_file(path, language_code.as_deref())
                    .with_context(|| {
                        format!("Failed to load language config: {}", path.display())
                    })?;
                Ok(Arc::new(vars))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_languages_resolve() {
        for lang in [Language::English, Language::Greek] {
            let vars = LanguageSource::BuiltIn(lang).resolve().unwrap();
            assert_eq!(vars.code(), lang.code());
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            LanguageSource::BuiltIn(Language::Greek).display_name(),
            "Built-in: Greek"
        );
        let external = LanguageSource::External {
            path: PathBuf::from("custom.toml"),
            language_code: Some("xx".to_string()),
        };
        assert_eq!(external.display_name(), "External: custom.toml (code: xx)");
    }

    #[test]
    fn test_external_config_takes_precedence() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[metadata]\ncode = \"xx\"\nname = \"Custom\"\n\n[punctuation]\nsentence_end = [\"!\"]\n"
        )
        .unwrap();

        let args = LanguageArgs {
            language: Language::Greek,
            language_config: Some(file.path().to_path_buf()),
            language_code: Some("yy".to_string()),
        };
        let vars = args.source().resolve().unwrap();
        assert_eq!(vars.code(), "yy");
        assert!(vars.is_sent_end_char('!'));
        assert!(!vars.is_sent_end_char('.'));
    }

    #[test]
    fn test_missing_external_config() {
        let source = LanguageSource::External {
            path: PathBuf::from("/nonexistent/lang.toml"),
            language_code: None,
        };
        let err = source.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load language config"));
    }
}
