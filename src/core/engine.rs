// src/core/engine.rs

use crate::core::expand::expand;
use crate::core::normalize::normalize;
use crate::core::transducer::PhoneticTransducer;
use crate::core::types::{PhonetiserConfig, Pronunciations};
use crate::lexicon::{self, FixedLexicon};

/// The word-to-phonemes engine: fixed-form lexicon, normalizer, scanner and
/// expander behind one facade. All fields are immutable after construction,
/// so one instance can serve any number of threads.
pub struct Phonetiser {
    config: PhonetiserConfig,
    lexicon: FixedLexicon,
    transducer: PhoneticTransducer,
    /// Twin scanner with qaf forced to /q/, for the qaf-preserving words.
    formal_transducer: PhoneticTransducer,
}

impl Phonetiser {
    pub fn new() -> Self {
        Self::with_config(PhonetiserConfig::default())
    }

    pub fn with_config(config: PhonetiserConfig) -> Self {
        Self::with_lexicon(config, FixedLexicon::default())
    }

    /// Build an engine around a caller-supplied lexicon (the built-in table
    /// plus user entries, usually).
    pub fn with_lexicon(config: PhonetiserConfig, lexicon: FixedLexicon) -> Self {
        let formal = PhonetiserConfig { urban: false, ..config };
        Self {
            config,
            lexicon,
            transducer: PhoneticTransducer::new(config),
            formal_transducer: PhoneticTransducer::new(formal),
        }
    }

    pub fn config(&self) -> PhonetiserConfig {
        self.config
    }

    /// All pronunciations of one word, canonical reading first. Empty when
    /// the word yields no phonemes at all.
    pub fn phonetise_word(&self, word: &str) -> Pronunciations {
        // 1. Authoritative overrides for irregular high-frequency words.
        if let Some(fixed) = self.lexicon.lookup(word) {
            return fixed.to_vec();
        }

        // 2. Rewrite into the canonical diacritic form.
        let normalized = normalize(word);

        // 3. Scan. Words on the qaf-preserving list keep formal /q/ even
        //    under the urban setting.
        let transducer = if lexicon::preserves_qaf(word) {
            &self.formal_transducer
        } else {
            &self.transducer
        };
        let tokens = transducer.transduce(&normalized);

        // 4. Expand alternative groups into concrete readings.
        expand(&tokens)
    }

    /// Phonetise whitespace-separated text. Returns the original text and,
    /// per word, its pronunciation list. A word with no phonemes maps to a
    /// single empty string so positions stay aligned with the input.
    pub fn phonetise(&self, text: &str) -> (String, Vec<Pronunciations>) {
        let mut per_word = Vec::new();
        for word in text.split_whitespace() {
            let pronunciations = self.phonetise_word(word);
            if pronunciations.is_empty() {
                per_word.push(vec![String::new()]);
            } else {
                per_word.push(pronunciations);
            }
        }
        (text.to_string(), per_word)
    }

    /// Canonical pronunciation per word, space-joined across the text.
    /// Words with no phonemes are left out of the join.
    pub fn primary_phonemes(&self, text: &str) -> String {
        let (_, per_word) = self.phonetise(text);
        let mut primary = Vec::new();
        for pronunciations in &per_word {
            match pronunciations.first() {
                Some(reading) if !reading.is_empty() => primary.push(reading.as_str()),
                _ => {}
            }
        }
        primary.join(" ")
    }
}

impl Default for Phonetiser {
    fn default() -> Self {
        Self::new()
    }
}

/// Phonetise with a default-configured engine.
pub fn phonetise(text: &str) -> (String, Vec<Pronunciations>) {
    Phonetiser::new().phonetise(text)
}

/// Canonical phoneme line with a default-configured engine.
pub fn primary_phonemes(text: &str) -> String {
    Phonetiser::new().primary_phonemes(text)
}
