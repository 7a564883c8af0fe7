//! Kazakh cardinal numbers.

use super::CardinalSpeller;
use crate::error::Result;

const KK_ZERO: &str = "нөл";

const KK_ONES: [&str; 10] = [
    "", "бір", "екі", "үш", "төрт", "бес", "алты", "жеті", "сегіз", "тоғыз",
];

const KK_TENS: [&str; 10] = [
    "", "он", "жиырма", "отыз", "қырық", "елу", "алпыс", "жетпіс", "сексен", "тоқсан",
];

const KK_HUNDRED: &str = "жүз";

/// Scale word for each group of three digits, least significant first.
const KK_SCALES: [&str; 7] = [
    "",
    "мың",
    "миллион",
    "миллиард",
    "триллион",
    "квадриллион",
    "квинтиллион",
];

/// Spells numbers in Kazakh; total over `u64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KazakhSpeller;

impl KazakhSpeller {
    pub fn new() -> Self {
        Self
    }
}

impl CardinalSpeller for KazakhSpeller {
    fn language(&self) -> &str {
        "kk"
    }

    fn spell(&self, n: u64) -> Result<String> {
        Ok(num_to_words_kk(n))
    }
}

/// Convert a three-digit group (0-999) into words.
fn push_hundreds(n: u64, words: &mut Vec<&'static str>) {
    let hundreds = (n / 100) as usize;
    let tens = ((n / 10) % 10) as usize;
    let ones = (n % 10) as usize;

    if hundreds > 0 {
        // 100 is plain "жүз", 200 is "екі жүз"
        if hundreds > 1 {
            words.push(KK_ONES[hundreds]);
        }
        words.push(KK_HUNDRED);
    }
    if tens > 0 {
        words.push(KK_TENS[tens]);
    }
    if ones > 0 {
        words.push(KK_ONES[ones]);
    }
}

/// Convert a number to Kazakh words.
pub fn num_to_words_kk(num: u64) -> String {
    if num == 0 {
        return KK_ZERO.to_string();
    }

    let mut groups = Vec::with_capacity(KK_SCALES.len());
    let mut n = num;
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }

    let mut words = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        push_hundreds(group, &mut words);
        if scale > 0 {
            words.push(KK_SCALES[scale]);
        }
    }

    words.join(" ")
}
