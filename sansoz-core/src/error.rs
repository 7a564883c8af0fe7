//! Error types for numeral expansion

use thiserror::Error;

/// Errors raised while loading language data or expanding numerals
#[derive(Debug, Error)]
pub enum NumeralError {
    /// Configuration loading, parsing or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No language data or speller registered under this code
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A rule pattern built from language data failed to compile
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A numeric literal the speller cannot spell
    #[error("numeral '{literal}' is out of range for {language} spelling")]
    OutOfRange {
        /// The digits as they appeared in the text
        literal: String,
        /// Speller language tag
        language: String,
    },

    /// Failure reported by a cardinal speller implementation
    #[error("Speller error: {0}")]
    Speller(String),
}

/// Result type for numeral operations
pub type Result<T> = std::result::Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = NumeralError::Configuration("missing [calendar]".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing [calendar]");
    }

    #[test]
    fn test_out_of_range_display() {
        let error = NumeralError::OutOfRange {
            literal: "99999999999999999999999".to_string(),
            language: "kk".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "numeral '99999999999999999999999' is out of range for kk spelling"
        );
    }

    #[test]
    fn test_invalid_pattern_from_regex_error() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error: NumeralError = regex_err.into();
        assert!(matches!(error, NumeralError::InvalidPattern(_)));
        assert!(error.to_string().starts_with("Invalid rule pattern:"));
    }
}
