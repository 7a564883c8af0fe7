//! Rule engine
//!
//! Seven rules run once each, in a fixed order, from the most specific
//! token shape to the most general. Every rule substitutes all of its
//! matches in one pass over the current text. Once no ASCII digit is left
//! the remaining rules are skipped. Text produced by a rewrite is never
//! fed back into a rule that has already run.

use crate::error::{NumeralError, Result};
use crate::language::{get_language_data, LanguageData};
use crate::ordinal::Ordinalizer;
use crate::rewrite::{
    rewrite_glued, rewrite_num_word_pair, rewrite_number, rewrite_suffix_pair, BareNumber,
    NumberWordPair, SuffixPair,
};
use crate::speller::{speller_for, CardinalSpeller};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

/// The numeral rules, listed in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `<1-31> <month>`
    DayMonth,
    /// `<4 digits> <year marker>`
    YearMarker,
    /// `<digits>-<ordinal suffix>`
    OrdinalSuffix,
    /// `<digits>-<group suffix>`
    GroupSuffix,
    /// `<letters><digits>`
    LettersDigits,
    /// `<digits><letters>`
    DigitsLetters,
    /// `<1-3 digits>` standing alone
    BareNumber,
}

impl RuleKind {
    /// Application order
    pub const ORDER: [RuleKind; 7] = [
        RuleKind::DayMonth,
        RuleKind::YearMarker,
        RuleKind::OrdinalSuffix,
        RuleKind::GroupSuffix,
        RuleKind::LettersDigits,
        RuleKind::DigitsLetters,
        RuleKind::BareNumber,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::DayMonth => "day_month",
            RuleKind::YearMarker => "year_marker",
            RuleKind::OrdinalSuffix => "ordinal_suffix",
            RuleKind::GroupSuffix => "group_suffix",
            RuleKind::LettersDigits => "letters_digits",
            RuleKind::DigitsLetters => "digits_letters",
            RuleKind::BareNumber => "bare_number",
        }
    }

    /// Name of the rewriter this rule dispatches to
    pub fn rewriter(&self) -> &'static str {
        match self {
            RuleKind::DayMonth | RuleKind::YearMarker => "number_word_pair",
            RuleKind::OrdinalSuffix | RuleKind::GroupSuffix => "suffix_pair",
            RuleKind::LettersDigits | RuleKind::DigitsLetters => "glued",
            RuleKind::BareNumber => "number",
        }
    }

    fn pattern(&self, data: &LanguageData) -> String {
        match self {
            RuleKind::DayMonth => format!(
                r"\b(?P<number>3[01]|[12][0-9]|[1-9])\s(?P<word>{})",
                alternation(data.months().iter())
            ),
            RuleKind::YearMarker => format!(
                r"\b(?P<number>[0-9]{{4}})\s(?P<word>{})",
                regex::escape(data.year_marker())
            ),
            RuleKind::OrdinalSuffix => format!(
                r"(?P<number>[0-9]+)-(?P<suffix>{})",
                alternation(data.suffixes().ordinal().iter())
            ),
            RuleKind::GroupSuffix => format!(
                r"(?P<number>[0-9]+)-(?P<suffix>{})",
                alternation(data.suffixes().group().iter())
            ),
            RuleKind::LettersDigits => format!("{}+[0-9]+", char_class(data.alphabet())),
            RuleKind::DigitsLetters => format!("[0-9]+{}+", char_class(data.alphabet())),
            RuleKind::BareNumber => r"\b[0-9]{1,3}\b".to_string(),
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Escaped alternation, longest alternatives first so that a shorter
/// entry never shadows a longer one sharing its prefix.
fn alternation<'a, I>(items: I) -> String
where
    I: Iterator<Item = &'a String>,
{
    let mut items: Vec<&str> = items.map(String::as_str).collect();
    items.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    items.dedup();
    items
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

fn char_class(alphabet: &[char]) -> String {
    let body: String = alphabet
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!("[{body}]")
}

fn has_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

/// A compiled rule: a pattern paired with the rewriter its kind selects
#[derive(Debug, Clone)]
pub struct NumeralRule {
    kind: RuleKind,
    pattern: Regex,
}

impl NumeralRule {
    pub fn new(kind: RuleKind, data: &LanguageData) -> Result<Self> {
        Ok(Self {
            kind,
            pattern: Regex::new(&kind.pattern(data))?,
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    // Capture names used here are exactly those written by `RuleKind::pattern`.
    fn rewrite(
        &self,
        caps: &Captures<'_>,
        data: &LanguageData,
        ordinalizer: &Ordinalizer<'_>,
    ) -> Result<String> {
        match self.kind {
            RuleKind::DayMonth | RuleKind::YearMarker => {
                let pair = NumberWordPair {
                    number: &caps["number"],
                    word: &caps["word"],
                };
                rewrite_num_word_pair(&pair, ordinalizer)
            }
            RuleKind::OrdinalSuffix | RuleKind::GroupSuffix => {
                let pair = SuffixPair {
                    number: &caps["number"],
                    suffix: &caps["suffix"],
                };
                rewrite_suffix_pair(&pair, data.suffixes(), ordinalizer)
            }
            RuleKind::LettersDigits | RuleKind::DigitsLetters => Ok(rewrite_glued(&caps[0])),
            RuleKind::BareNumber => rewrite_number(&BareNumber(&caps[0]), ordinalizer),
        }
    }

    /// Substitute every match; returns the new text and the match count.
    /// Nothing is returned if any single rewrite fails.
    fn apply<'t>(
        &self,
        text: &'t str,
        data: &LanguageData,
        ordinalizer: &Ordinalizer<'_>,
    ) -> Result<(Cow<'t, str>, usize)> {
        let mut out = String::new();
        let mut last = 0;
        let mut matches = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(&self.rewrite(&caps, data, ordinalizer)?);
            last = whole.end();
            matches += 1;
        }

        if matches == 0 {
            return Ok((Cow::Borrowed(text), 0));
        }
        out.push_str(&text[last..]);
        Ok((Cow::Owned(out), matches))
    }
}

/// How many matches one rule rewrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: RuleKind,
    pub matches: usize,
}

/// Expanded text plus the rules that fired on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    pub hits: Vec<RuleHit>,
}

impl Expansion {
    /// True when no ASCII digit survived expansion
    pub fn is_complete(&self) -> bool {
        !has_digit(&self.text)
    }

    pub fn total_matches(&self) -> usize {
        self.hits.iter().map(|hit| hit.matches).sum()
    }
}

/// Expands numerals in text for one language.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct NumeralExpander {
    data: Arc<LanguageData>,
    speller: Arc<dyn CardinalSpeller>,
    rules: Vec<NumeralRule>,
}

impl NumeralExpander {
    /// Compile the rule list for `data`, spelling numbers with `speller`
    pub fn new(data: Arc<LanguageData>, speller: Arc<dyn CardinalSpeller>) -> Result<Self> {
        let rules = RuleKind::ORDER
            .iter()
            .map(|kind| NumeralRule::new(*kind, &data))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Built {} numeral rules for '{}' with {} speller",
            rules.len(),
            data.code(),
            speller.language()
        );
        Ok(Self {
            data,
            speller,
            rules,
        })
    }

    /// Expander over embedded language data
    pub fn for_language(code: &str) -> Result<Self> {
        let data = get_language_data(code)?;
        let speller = speller_for(data.speller_tag())?;
        Self::new(data, speller)
    }

    /// Expander over externally loaded data, using the speller it names
    pub fn from_data(data: LanguageData) -> Result<Self> {
        let speller = speller_for(data.speller_tag())?;
        Self::new(Arc::new(data), speller)
    }

    pub fn language(&self) -> &LanguageData {
        &self.data
    }

    pub fn rules(&self) -> &[NumeralRule] {
        &self.rules
    }

    pub fn expand(&self, text: &str) -> Result<String> {
        Ok(self.expand_with_report(text)?.text)
    }

    pub fn expand_with_report(&self, text: &str) -> Result<Expansion> {
        let ordinalizer = Ordinalizer::new(self.speller.as_ref(), self.data.ordinals());
        let mut current = text.to_string();
        let mut hits = Vec::new();

        for (index, rule) in self.rules.iter().enumerate() {
            if !has_digit(&current) {
                log::trace!(
                    "No digits left, skipping {} remaining rule(s)",
                    self.rules.len() - index
                );
                break;
            }

            let (next, matches) = rule.apply(&current, &self.data, &ordinalizer)?;
            if matches > 0 {
                log::debug!("Rule {} rewrote {} match(es)", rule.kind(), matches);
                hits.push(RuleHit {
                    rule: rule.kind(),
                    matches,
                });
                current = next.into_owned();
            }
        }

        Ok(Expansion {
            text: current,
            hits,
        })
    }
}

static KAZAKH: OnceLock<Option<NumeralExpander>> = OnceLock::new();

/// Expand numerals in Kazakh text using the embedded language data
pub fn expand_numbers(text: &str) -> Result<String> {
    let expander = KAZAKH
        .get_or_init(|| match NumeralExpander::for_language("kk") {
            Ok(expander) => Some(expander),
            Err(e) => {
                log::error!("Failed to build Kazakh numeral expander: {e}");
                None
            }
        })
        .as_ref()
        .ok_or_else(|| NumeralError::UnsupportedLanguage("kk".to_string()))?;

    expander.expand(text)
}
