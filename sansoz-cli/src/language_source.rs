//! Language source management for CLI

use crate::commands::expand::Language;
use crate::error::CliError;
use anyhow::Result;
use sansoz_core::{LanguageData, NumeralExpander};
use std::path::PathBuf;

/// Source of language numeral data
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Embedded language data
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

    /// Build an expander for this source
    pub fn expander(&self) -> Result<NumeralExpander> {
        let expander = match self {
            LanguageSource::BuiltIn(lang) => NumeralExpander::for_language(lang.code()),
            LanguageSource::External {
                path,
                language_code,
            } => LanguageData::from_file(path, language_code.as_deref())
                .and_then(NumeralExpander::from_data),
        };

        expander.map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kazakh => "Kazakh",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Kazakh => "kk",
        }
    }
}
