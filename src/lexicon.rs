// src/lexicon.rs

use crate::core::tables::{classify, CharKind, ALIF, ALIF_MADDA};
use crate::core::types::Pronunciations;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Irregular high-frequency Levantine words and their fixed pronunciations.
/// These override the rules outright: demonstratives, pronouns and frozen
/// particles whose colloquial readings are not derivable from the script.
const LEVANTINE_FIXED_WORDS: [(&str, &str); 17] = [
    // Demonstratives.
    ("هادا", "h aa d a"),
    ("هادي", "h aa d i"),
    ("هادول", "h aa d o l"),
    ("هاي", "h ay"),
    // Pronouns.
    ("انا", "' a n a"),
    ("انته", "' a n t e"),
    ("انتي", "' a n t i"),
    ("هوه", "h u ww e"),
    ("هيه", "h i yy e"),
    // Verbs and particles.
    ("بدي", "b i dd i"),
    ("شو", "$ uu"),
    ("ليش", "l ei $"),
    ("وين", "w ein"),
    ("مو", "m uu"),
    ("بس", "b a s"),
    // Frozen forms.
    ("الله", "' a ll a"),
    ("يلا", "y a ll a"),
];

/// Skeletons of words where qaf keeps its formal /q/ even under the urban
/// dialect setting (religious terms and place names).
const QAF_PRESERVING: [&str; 4] = ["قرآن", "قدس", "قاهر", "القاهر"];

/// Strip a word to its consonant skeleton, the lexicon key. Keeps the
/// unambiguous consonants, lam/waw/ya, every hamza variant, bare alif and
/// alif-madda; diacritics, ta-marbuta and alif-maqsura drop out.
pub fn skeleton(word: &str) -> String {
    word.chars()
        .filter(|&c| {
            c == ALIF
                || c == ALIF_MADDA
                || matches!(
                    classify(c),
                    CharKind::Consonant(_) | CharKind::Ambiguous(_) | CharKind::Hamza
                )
        })
        .collect()
}

/// True for words the urban engine must route through its formal-qaf twin.
pub fn preserves_qaf(word: &str) -> bool {
    let skeleton = skeleton(word);
    QAF_PRESERVING.contains(&skeleton.as_str())
}

/// The exact-match override table, keyed by consonant skeleton. `Default`
/// loads the built-in Levantine inventory; callers may extend a copy with
/// their own entries before handing it to an engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedLexicon {
    entries: HashMap<String, Pronunciations>,
}

impl FixedLexicon {
    /// An empty lexicon with no overrides at all.
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Register the pronunciations for a word; the key is the word's
    /// skeleton, so any diacritization of it will match.
    pub fn insert(&mut self, word: &str, pronunciations: Pronunciations) {
        self.entries.insert(skeleton(word), pronunciations);
    }

    /// Exact-match lookup on the word's skeleton. A hit is authoritative
    /// and bypasses the scanner entirely.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(skeleton(word).as_str()).map(|p| p.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FixedLexicon {
    fn default() -> Self {
        let mut lexicon = FixedLexicon::new();
        for (word, pronunciation) in LEVANTINE_FIXED_WORDS {
            lexicon.insert(word, vec![pronunciation.to_string()]);
        }
        lexicon
    }
}
