//! Numeral expansion for Kazakh text normalization
//!
//! This crate rewrites numeric tokens inside free-form text into their
//! spoken word forms ahead of speech synthesis. It recognises a fixed set
//! of token shapes and applies one rule per shape, in a fixed order:
//!
//! 1. day of month followed by a month name (`3 наурыз`)
//! 2. four-digit year followed by the year marker (`2023 жыл`)
//! 3. number with an ordinal suffix (`5-ші`)
//! 4. number with a case or collective suffix (`5-еу`)
//! 5. letters glued to digits (`A4`), digits dropped
//! 6. digits glued to letters (`3D`), digits dropped
//! 7. a standalone number of one to three digits
//!
//! Language data (suffix sets, month names, alphabet, ordinal table) is
//! configuration, loaded from TOML. Cardinal spelling sits behind the
//! [`CardinalSpeller`] trait.
//!
//! # Example
//!
//! ```rust
//! use sansoz_core::NumeralExpander;
//!
//! let expander = NumeralExpander::for_language("kk").unwrap();
//! let text = expander.expand("3 наурыз 2023 жыл 5-ші 30 қарашада").unwrap();
//! assert_eq!(
//!     text,
//!     "үшінші наурыз екі мың жиырма үшінші жыл бесінші отызыншы қарашада"
//! );
//! ```

pub mod engine;
pub mod error;
pub mod language;
pub mod ordinal;
pub mod rewrite;
pub mod speller;
pub mod suffix;

pub use engine::{expand_numbers, Expansion, NumeralExpander, NumeralRule, RuleHit, RuleKind};
pub use error::{NumeralError, Result};
pub use language::{get_language_data, list_available_languages, LanguageConfig, LanguageData};
pub use ordinal::{OrdinalTable, Ordinalizer};
pub use rewrite::{
    rewrite_glued, rewrite_num_word_pair, rewrite_number, rewrite_suffix_pair, BareNumber,
    NumberWordPair, SuffixPair,
};
pub use speller::{cardinal_word, speller_for, CardinalSpeller, KazakhSpeller};
pub use suffix::{classify_suffix, SuffixClass, SuffixSets};
