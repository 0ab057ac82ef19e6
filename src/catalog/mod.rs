//! Built-in word sets and the flavour facts shown with answer feedback.
//!
//! Each set lives in its own file; `word_sets()` lists them in menu order.

use crate::types::{WordEntry, WordSet};

mod set1;
mod set2;
mod set3;
mod set4;
mod set5;

pub use set1::SET1;
pub use set2::SET2;
pub use set3::SET3;
pub use set4::SET4;
pub use set5::SET5;

static WORD_SETS: [&WordSet; 5] = [&SET1, &SET2, &SET3, &SET4, &SET5];

/// All built-in sets in menu order.
pub fn word_sets() -> &'static [&'static WordSet] {
    &WORD_SETS
}

/// Look up a set by key ("set1".."set5"); a bare number ("3") also works.
pub fn word_set(key: &str) -> Option<&'static WordSet> {
    let key = key.trim();
    WORD_SETS
        .iter()
        .copied()
        .find(|s| s.key == key || s.key.strip_prefix("set") == Some(key))
}

pub(crate) const fn entry(
    word: &'static str,
    pronunciation: &'static str,
    options: &'static [&'static str],
    definition: &'static str,
    origin: &'static str,
    part_of_speech: &'static str,
    sentence: &'static str,
) -> WordEntry {
    WordEntry {
        word,
        pronunciation,
        options,
        definition,
        origin,
        part_of_speech,
        sentence,
    }
}

pub static FUN_FACTS: &[&str] = &[
    "The longest word in a major English dictionary has 45 letters.",
    "\"Set\" has more dictionary meanings than almost any other English word.",
    "The letter E is the most commonly used letter in English.",
    "\"Queue\" keeps sounding the same even after you drop its last four letters.",
    "Shakespeare is credited with introducing hundreds of words, like \"lonely\".",
    "\"Bookkeeper\" has three double letters in a row.",
    "The dot over a lowercase i or j is called a tittle.",
    "\"Dreamt\" is one of the few English words that end in \"mt\".",
    "Spelling bees have been held in the United States since the 1800s.",
    "\"Strengths\" packs eight consonants around a single vowel.",
    "A pangram, like \"The quick brown fox jumps over the lazy dog\", uses every letter.",
    "\"Typewriter\" can be typed using only the top row of a keyboard.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key_and_number() {
        assert_eq!(word_set("set1").map(|s| s.key), Some("set1"));
        assert_eq!(word_set("4").map(|s| s.key), Some("set4"));
        assert!(word_set("set9").is_none());
        assert!(word_set("").is_none());
    }

    #[test]
    fn test_sets_listed_in_order() {
        let keys: Vec<_> = word_sets().iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["set1", "set2", "set3", "set4", "set5"]);
    }
}
