//! Embedded language data registry

use super::config::LanguageConfig;
use super::data::LanguageData;
use crate::error::NumeralError;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static LANGUAGE_DATA: OnceLock<HashMap<&'static str, Arc<LanguageData>>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

/// Alternative names accepted for each embedded code
const ALIASES: &[(&str, &str)] = &[("kazakh", "kk"), ("kz", "kk")];

fn load_embedded() -> Result<HashMap<&'static str, Arc<LanguageData>>, NumeralError> {
    let mut languages = HashMap::new();

    let embedded_configs = [embed_language_config!(
        "kk",
        "../../configs/languages/kazakh.toml"
    )];

    for (code, toml_content) in embedded_configs {
        let config = LanguageConfig::from_toml_str(toml_content).map_err(|e| {
            NumeralError::Configuration(format!("Failed to parse {code} config: {e}"))
        })?;

        // Validate that the config code matches
        if config.metadata.code != code {
            return Err(NumeralError::Configuration(format!(
                "Config code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        let data = LanguageData::from_config(&config)?;
        log::debug!("Loaded embedded language data '{code}'");
        languages.insert(code, Arc::new(data));
    }

    Ok(languages)
}

fn registry() -> &'static HashMap<&'static str, Arc<LanguageData>> {
    LANGUAGE_DATA.get_or_init(|| match load_embedded() {
        Ok(languages) => languages,
        Err(e) => {
            log::error!("Failed to load embedded language data: {e}");
            HashMap::new()
        }
    })
}

fn canonical_code(code: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(code))
        .map_or(code, |&(_, canonical)| canonical)
}

/// Look up embedded language data by code or alias
pub fn get_language_data(code: &str) -> Result<Arc<LanguageData>, NumeralError> {
    registry()
        .get(canonical_code(code))
        .cloned()
        .ok_or_else(|| NumeralError::UnsupportedLanguage(code.to_string()))
}

/// Canonical codes of all embedded languages, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = registry().keys().copied().collect();
    codes.sort_unstable();
    codes
}
