//! Cardinal number spelling
//!
//! The expander never spells numbers itself; it asks a [`CardinalSpeller`]
//! for the word form and only rewrites around it.

mod kazakh;

pub use kazakh::{num_to_words_kk, KazakhSpeller};

use crate::error::{NumeralError, Result};
use std::fmt::Debug;
use std::sync::Arc;

/// Spells a non-negative integer as space-separated cardinal words.
pub trait CardinalSpeller: Send + Sync + Debug {
    /// Language tag of the words produced
    fn language(&self) -> &str;

    /// Spell `n`. Must be deterministic.
    fn spell(&self, n: u64) -> Result<String>;

    /// Spell a run of ASCII digits as matched in text
    fn spell_literal(&self, digits: &str) -> Result<String> {
        self.spell(parse_literal(digits, self.language())?)
    }
}

/// Parse a run of ASCII digits, reporting overflow as `OutOfRange`.
pub fn parse_literal(digits: &str, language: &str) -> Result<u64> {
    digits.parse().map_err(|_| NumeralError::OutOfRange {
        literal: digits.to_string(),
        language: language.to_string(),
    })
}

/// Get the speller registered for a language tag
pub fn speller_for(tag: &str) -> Result<Arc<dyn CardinalSpeller>> {
    match tag.to_ascii_lowercase().as_str() {
        "kk" | "kz" | "kazakh" => Ok(Arc::new(KazakhSpeller::new())),
        _ => Err(NumeralError::UnsupportedLanguage(tag.to_string())),
    }
}

/// Spell `n` in the language identified by `tag`
pub fn cardinal_word(n: u64, tag: &str) -> Result<String> {
    speller_for(tag)?.spell(n)
}
