//! Ordinal word forms built on top of cardinal spelling

use crate::error::Result;
use crate::speller::CardinalSpeller;
use std::collections::HashMap;

/// Maps the final word of a cardinal to its ordinal form.
///
/// Keys are exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct OrdinalTable {
    words: HashMap<String, String>,
}

impl OrdinalTable {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            words: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, cardinal: &str) -> Option<&str> {
        self.words.get(cardinal).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Replace the last space-separated word of `cardinal` with its ordinal
    /// form. Unregistered words are left as they are.
    pub fn ordinalize(&self, cardinal: &str) -> String {
        let (head, last) = match cardinal.rsplit_once(' ') {
            Some((head, last)) => (Some(head), last),
            None => (None, cardinal),
        };
        let last = self.get(last).unwrap_or(last);

        match head {
            Some(head) => format!("{head} {last}"),
            None => last.to_string(),
        }
    }
}

/// Cardinal and ordinal spelling for one language
#[derive(Debug, Clone, Copy)]
pub struct Ordinalizer<'a> {
    speller: &'a dyn CardinalSpeller,
    table: &'a OrdinalTable,
}

impl<'a> Ordinalizer<'a> {
    pub fn new(speller: &'a dyn CardinalSpeller, table: &'a OrdinalTable) -> Self {
        Self { speller, table }
    }

    pub fn cardinal(&self, n: u64) -> Result<String> {
        self.speller.spell(n)
    }

    pub fn to_ordinal(&self, n: u64) -> Result<String> {
        Ok(self.table.ordinalize(&self.speller.spell(n)?))
    }

    /// Cardinal form of a digit run matched in text
    pub fn cardinal_literal(&self, digits: &str) -> Result<String> {
        self.speller.spell_literal(digits)
    }

    /// Ordinal form of a digit run matched in text
    pub fn ordinal_literal(&self, digits: &str) -> Result<String> {
        Ok(self.table.ordinalize(&self.speller.spell_literal(digits)?))
    }
}
