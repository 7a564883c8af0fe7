//! Immutable runtime form of a language configuration

use crate::error::NumeralError;
use crate::language::config::LanguageConfig;
use crate::ordinal::OrdinalTable;
use crate::suffix::SuffixSets;
use std::collections::HashSet;
use std::path::Path;

/// Numeral data for one language, built once and shared read-only
#[derive(Debug, Clone)]
pub struct LanguageData {
    code: String,
    name: String,
    speller: String,
    suffixes: SuffixSets,
    ordinals: OrdinalTable,
    months: Vec<String>,
    year_marker: String,
    alphabet: Vec<char>,
}

impl LanguageData {
    /// Build language data from a configuration, validating it first
    pub fn from_config(config: &LanguageConfig) -> Result<Self, NumeralError> {
        config.validate()?;

        let mut seen = HashSet::new();
        let alphabet = config
            .alphabet
            .chars
            .chars()
            .filter(|c| seen.insert(*c))
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            speller: config.speller_tag().to_string(),
            suffixes: SuffixSets::new(
                config.suffixes.ordinal.iter().cloned(),
                config.suffixes.group.iter().cloned(),
            ),
            ordinals: OrdinalTable::from_pairs(
                config
                    .ordinals
                    .iter()
                    .map(|(cardinal, ordinal)| (cardinal.clone(), ordinal.clone())),
            ),
            months: config.calendar.months.clone(),
            year_marker: config.calendar.year_marker.clone(),
            alphabet,
        })
    }

    /// Load language data from an external TOML file
    pub fn from_file(path: &Path, language_code: Option<&str>) -> Result<Self, NumeralError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NumeralError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: LanguageConfig = toml::from_str(&content).map_err(|e| {
            NumeralError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Override language code if provided
        if let Some(code) = language_code {
            config.metadata.code = code.to_string();
        }

        log::debug!(
            "Loaded language data '{}' from {}",
            config.metadata.code,
            path.display()
        );
        Self::from_config(&config)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag of the cardinal speller this data pairs with
    pub fn speller_tag(&self) -> &str {
        &self.speller
    }

    pub fn suffixes(&self) -> &SuffixSets {
        &self.suffixes
    }

    pub fn ordinals(&self) -> &OrdinalTable {
        &self.ordinals
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn year_marker(&self) -> &str {
        &self.year_marker
    }

    /// Glued-token alphabet, de-duplicated in first-seen order
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suffix::SuffixClass;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE: &str = r#"
        [metadata]
        code = "kk"
        name = "Kazakh"

        [suffixes]
        ordinal = ["ші"]
        group = ["еу"]

        [calendar]
        months = ["наурыз"]
        year_marker = "жыл"

        [alphabet]
        chars = "ааббв"

        [ordinals]
        "бес" = "бесінші"
    "#;

    #[test]
    fn test_from_config_builds_tables() {
        let config = LanguageConfig::from_toml_str(FIXTURE).unwrap();
        let data = LanguageData::from_config(&config).unwrap();

        assert_eq!(data.code(), "kk");
        assert_eq!(data.speller_tag(), "kk");
        assert_eq!(data.alphabet(), &['а', 'б', 'в']);
        assert_eq!(data.suffixes().classify("ші"), SuffixClass::Ordinal);
        assert_eq!(data.ordinals().get("бес"), Some("бесінші"));
        assert_eq!(data.months(), &["наурыз".to_string()]);
        assert_eq!(data.year_marker(), "жыл");
    }

    #[test]
    fn test_from_config_validates() {
        let mut config = LanguageConfig::from_toml_str(FIXTURE).unwrap();
        config.alphabet.chars.clear();
        assert!(matches!(
            LanguageData::from_config(&config),
            Err(NumeralError::Configuration(_))
        ));
    }

    #[test]
    fn test_from_file_with_code_override() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", FIXTURE).unwrap();

        let data = LanguageData::from_file(temp_file.path(), Some("kk-test")).unwrap();
        assert_eq!(data.code(), "kk-test");
        // Speller tag was never set, so it follows the overridden code
        assert_eq!(data.speller_tag(), "kk-test");
    }

    #[test]
    fn test_from_file_missing() {
        let result = LanguageData::from_file(Path::new("/nonexistent/kk.toml"), None);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_from_file_bad_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[metadata\ncode=").unwrap();

        let err = LanguageData::from_file(temp_file.path(), None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
