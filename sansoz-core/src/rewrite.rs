//! Token rewriters
//!
//! Each rewriter receives a token already decomposed by the rule that
//! matched it and returns the replacement text.

use crate::error::Result;
use crate::ordinal::Ordinalizer;
use crate::suffix::{SuffixClass, SuffixSets};

/// `<digits> <word>`, e.g. a day and a month name or a year and its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberWordPair<'t> {
    pub number: &'t str,
    pub word: &'t str,
}

/// `<digits>-<suffix>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixPair<'t> {
    pub number: &'t str,
    pub suffix: &'t str,
}

impl SuffixPair<'_> {
    /// The token as it appeared in the text
    pub fn original(&self) -> String {
        format!("{}-{}", self.number, self.suffix)
    }
}

/// A standalone run of one to three digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BareNumber<'t>(pub &'t str);

/// Ordinal number followed by the untouched word.
pub fn rewrite_num_word_pair(
    pair: &NumberWordPair<'_>,
    ordinalizer: &Ordinalizer<'_>,
) -> Result<String> {
    let ordinal = ordinalizer.ordinal_literal(pair.number)?;
    Ok(format!("{} {}", ordinal, pair.word))
}

/// Cardinal words for a bare number.
pub fn rewrite_number(number: &BareNumber<'_>, ordinalizer: &Ordinalizer<'_>) -> Result<String> {
    ordinalizer.cardinal_literal(number.0)
}

/// Strip every digit from a glued letter/digit token, keeping the letters
/// in place.
pub fn rewrite_glued(token: &str) -> String {
    token.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Ordinal for ordinal suffixes, cardinal plus suffix for group suffixes,
/// original text otherwise.
pub fn rewrite_suffix_pair(
    pair: &SuffixPair<'_>,
    suffixes: &SuffixSets,
    ordinalizer: &Ordinalizer<'_>,
) -> Result<String> {
    match suffixes.classify(pair.suffix) {
        SuffixClass::Ordinal => ordinalizer.ordinal_literal(pair.number),
        SuffixClass::Group => {
            let mut words = ordinalizer.cardinal_literal(pair.number)?;
            words.push_str(pair.suffix);
            Ok(words)
        }
        SuffixClass::Unknown => Ok(pair.original()),
    }
}
