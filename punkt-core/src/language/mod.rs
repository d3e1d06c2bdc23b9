//! Language variables for Punkt
//!
//! Character classes and punctuation patterns are data-driven: each
//! language is a TOML file turned into a [`ConfigurableLanguageVars`] and
//! shared behind the [`LanguageVars`] trait.

pub mod config;
pub mod interface;
pub(crate) mod loader;
pub mod runtime;
pub(crate) mod scan;
pub(crate) mod tables;

pub use config::LanguageConfig;
pub use interface::{LanguageVars, PeriodContext};
pub use loader::{embedded_source, english, get_language, list_languages, LanguageInfo};
pub use runtime::ConfigurableLanguageVars;
