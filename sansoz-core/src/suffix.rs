//! Suffix classification for `<digits>-<suffix>` tokens

use std::collections::HashSet;

/// How a suffix after `-` affects the number before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixClass {
    /// Marks the number as an ordinal
    Ordinal,
    /// Case or collective ending appended to the cardinal
    Group,
    /// Not a known suffix; the token is left alone
    Unknown,
}

/// The ordinal and group suffix sets of a language
#[derive(Debug, Clone, Default)]
pub struct SuffixSets {
    ordinal: HashSet<String>,
    group: HashSet<String>,
}

impl SuffixSets {
    pub fn new<O, G>(ordinal: O, group: G) -> Self
    where
        O: IntoIterator<Item = String>,
        G: IntoIterator<Item = String>,
    {
        Self {
            ordinal: ordinal.into_iter().collect(),
            group: group.into_iter().collect(),
        }
    }

    pub fn ordinal(&self) -> &HashSet<String> {
        &self.ordinal
    }

    pub fn group(&self) -> &HashSet<String> {
        &self.group
    }

    /// Classify an exact suffix; the ordinal set is checked first.
    pub fn classify(&self, suffix: &str) -> SuffixClass {
        if self.ordinal.contains(suffix) {
            SuffixClass::Ordinal
        } else if self.group.contains(suffix) {
            SuffixClass::Group
        } else {
            SuffixClass::Unknown
        }
    }
}

/// Classify `suffix` against `sets`
pub fn classify_suffix(suffix: &str, sets: &SuffixSets) -> SuffixClass {
    sets.classify(suffix)
}
