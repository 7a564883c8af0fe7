//! Configuration structures and validation
//!
//! This module defines the TOML schema for language numeral data.

use crate::error::NumeralError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: MetadataConfig,
    pub suffixes: SuffixConfig,
    pub calendar: CalendarConfig,
    pub alphabet: AlphabetConfig,
    #[serde(default)]
    pub ordinals: HashMap<String, String>,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
    /// Cardinal speller tag; falls back to `code` when absent
    #[serde(default)]
    pub speller: Option<String>,
}

/// Suffixes recognised after a `<digits>-` prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixConfig {
    pub ordinal: Vec<String>,
    pub group: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub months: Vec<String>,
    pub year_marker: String,
}

/// Letters that may be glued to digits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetConfig {
    pub chars: String,
}

impl LanguageConfig {
    /// Parse a configuration from TOML text without validating it
    pub fn from_toml_str(content: &str) -> Result<Self, NumeralError> {
        toml::from_str(content)
            .map_err(|e| NumeralError::Configuration(format!("Failed to parse TOML: {e}")))
    }

    /// Speller tag to use for this language
    pub fn speller_tag(&self) -> &str {
        self.metadata
            .speller
            .as_deref()
            .unwrap_or(&self.metadata.code)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), NumeralError> {
        if self.metadata.code.trim().is_empty() {
            return Err(config_error("Language code must not be empty"));
        }

        check_suffixes("ordinal", &self.suffixes.ordinal)?;
        check_suffixes("group", &self.suffixes.group)?;

        let ordinal: HashSet<&str> = self.suffixes.ordinal.iter().map(String::as_str).collect();
        let mut collisions: Vec<&str> = self
            .suffixes
            .group
            .iter()
            .map(String::as_str)
            .filter(|s| ordinal.contains(s))
            .collect();
        if !collisions.is_empty() {
            collisions.sort_unstable();
            collisions.dedup();
            return Err(config_error(&format!(
                "Suffixes listed as both ordinal and group: {}",
                collisions.join(", ")
            )));
        }

        if self.calendar.months.is_empty() {
            return Err(config_error("No month names defined"));
        }
        if self.calendar.months.iter().any(|m| m.trim().is_empty()) {
            return Err(config_error("Month names must not be empty"));
        }
        if self.calendar.year_marker.trim().is_empty() {
            return Err(config_error("Year marker must not be empty"));
        }

        if self.alphabet.chars.is_empty() {
            return Err(config_error("Alphabet must not be empty"));
        }
        if self.alphabet.chars.chars().any(|c| c.is_ascii_digit()) {
            return Err(config_error("Alphabet must not contain digits"));
        }

        if self
            .ordinals
            .iter()
            .any(|(cardinal, ordinal)| cardinal.is_empty() || ordinal.is_empty())
        {
            return Err(config_error("Ordinal table entries must not be empty"));
        }

        Ok(())
    }
}

fn check_suffixes(kind: &str, suffixes: &[String]) -> Result<(), NumeralError> {
    if suffixes.is_empty() {
        return Err(config_error(&format!("No {kind} suffixes defined")));
    }
    for suffix in suffixes {
        if suffix.is_empty() {
            return Err(config_error(&format!("Empty {kind} suffix")));
        }
        if suffix.chars().any(|c| c.is_ascii_digit() || c == '-') {
            return Err(config_error(&format!(
                "Invalid {kind} suffix '{suffix}': digits and '-' are not allowed"
            )));
        }
    }
    Ok(())
}

fn config_error(msg: &str) -> NumeralError {
    NumeralError::Configuration(msg.to_string())
}
