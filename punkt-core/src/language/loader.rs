//! Language configuration loader
//!
//! Manages the embedded language configurations with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use log::warn;

use crate::error::{PunktError, Result};
use crate::language::{
    config::LanguageConfig, interface::LanguageVars, runtime::ConfigurableLanguageVars,
};

/// Embedded languages as (code, alias, TOML source)
const EMBEDDED_SOURCES: &[(&str, &str, &str)] = &[
    ("en", "english", include_str!("../../configs/languages/english.toml")),
    ("el", "greek", include_str!("../../configs/languages/greek.toml")),
];

static EMBEDDED: OnceLock<HashMap<String, Arc<dyn LanguageVars>>> = OnceLock::new();

/// Basic information about an embedded language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: String,
    pub alias: String,
    pub name: String,
}

fn embedded() -> &'static HashMap<String, Arc<dyn LanguageVars>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, alias, source) in EMBEDDED_SOURCES {
            match load_embedded_language(source) {
                Ok(vars) => {
                    map.insert((*alias).to_string(), vars.clone());
                    map.insert((*code).to_string(), vars);
                }
                Err(e) => warn!("failed to load embedded language '{code}': {e}"),
            }
        }

        map
    })
}

fn load_embedded_language(source: &str) -> Result<Arc<dyn LanguageVars>> {
    let config = LanguageConfig::from_toml(source)?;
    Ok(Arc::new(ConfigurableLanguageVars::from_config(&config)?))
}

/// Look up language variables by code or English name (case-insensitive)
pub fn get_language(code: &str) -> Result<Arc<dyn LanguageVars>> {
    embedded()
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| PunktError::UnsupportedLanguage(code.to_string()))
}

/// The default English language variables
pub fn english() -> Arc<dyn LanguageVars> {
    static FALLBACK: OnceLock<Arc<dyn LanguageVars>> = OnceLock::new();

    if let Some(vars) = embedded().get("en") {
        return vars.clone();
    }

    // The built-in defaults are English, so this only matters if the
    // embedded file failed to parse.
    FALLBACK
        .get_or_init(|| {
            let config = LanguageConfig::default();
            match ConfigurableLanguageVars::from_config(&config) {
                Ok(vars) => Arc::new(vars) as Arc<dyn LanguageVars>,
                Err(e) => unreachable!("default language configuration is invalid: {e}"),
            }
        })
        .clone()
}

/// Embedded languages in registration order
pub fn list_languages() -> Vec<LanguageInfo> {
    EMBEDDED_SOURCES
        .iter()
        .filter_map(|(code, alias, source)| {
            let config = LanguageConfig::from_toml(source).ok()?;
            Some(LanguageInfo {
                code: (*code).to_string(),
                alias: (*alias).to_string(),
                name: config.metadata.name,
            })
        })
        .collect()
}

/// The embedded TOML source for a language, used as a configuration template
pub fn embedded_source(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    EMBEDDED_SOURCES
        .iter()
        .find(|(c, alias, _)| *c == code || *alias == code)
        .map(|(_, _, source)| *source)
}
