// src/core/transducer.rs
//
// Single-pass scanner over a sentinel-padded word. Each position consults up
// to two cells ahead and two behind; rule precedence is fixed (article onset,
// article lam, initial alif+vowel, then one dispatch on the character class).

use crate::core::tables::{
    classify, is_proclitic, is_sun_letter, short_vowel, CharKind, VowelPair, ALIF,
    ALIF_HAMZA_ABOVE, ALIF_HAMZA_BELOW, GLOTTAL_STOP, LAM, SHADDA,
};
use crate::core::types::{PhonemeToken, PhonetiserConfig};

/// One cell of the padded scan buffer. Two `Edge` cells on each side give the
/// scanner uniform two-position lookaround without bounds checks, and cannot
/// collide with any real codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Edge,
    Letter(char),
}

impl Slot {
    fn letter(self) -> Option<char> {
        match self {
            Slot::Edge => None,
            Slot::Letter(c) => Some(c),
        }
    }
}

/// Per-word scan flags, fresh for every `transduce` call.
#[derive(Debug, Default, Clone, Copy)]
struct ScanState {
    /// Sticky once an emphatic consonant is seen; cleared only by a plain
    /// non-transparent consonant. Selects the vowel alternant at emission.
    emphatic_context: bool,
    /// Between recognizing the article's alif and consuming its lam.
    in_definite_article: bool,
    /// The consonant after an assimilated article lam carries the doubling.
    next_is_doubled: bool,
    /// Lookahead consumption: the next one or two cells were already folded
    /// into an earlier emission.
    skip_next: bool,
    skip_second: bool,
}

/// The configured scanner. Construction fixes the dialect; one instance is
/// immutable and safe to share across threads.
pub struct PhoneticTransducer {
    urban: bool,
    simplify_feminine_endings: bool,
}

impl PhoneticTransducer {
    pub fn new(config: PhonetiserConfig) -> Self {
        Self {
            urban: config.urban,
            simplify_feminine_endings: config.simplify_feminine_endings,
        }
    }

    /// Scan one normalized word into phoneme tokens.
    ///
    /// Empty input and the single-hyphen blank placeholder yield an empty
    /// sequence: no pronunciation, the caller substitutes a blank. Characters
    /// outside the known inventory emit nothing and the scan moves on.
    pub fn transduce(&self, word: &str) -> Vec<PhonemeToken> {
        if word.is_empty() || word.trim() == "-" {
            return Vec::new();
        }

        let mut slots = Vec::with_capacity(word.chars().count() + 4);
        slots.push(Slot::Edge);
        slots.push(Slot::Edge);
        slots.extend(word.chars().map(Slot::Letter));
        slots.push(Slot::Edge);
        slots.push(Slot::Edge);

        let mut phones: Vec<PhonemeToken> = Vec::new();
        let mut state = ScanState::default();

        for index in 2..slots.len() - 2 {
            if state.skip_next {
                state.skip_next = false;
                continue;
            }
            if state.skip_second {
                state.skip_second = false;
                continue;
            }

            let Slot::Letter(letter) = slots[index] else {
                continue;
            };
            let next1 = slots[index + 1];
            let next2 = slots[index + 2];
            let prev1 = slots[index - 1];
            let prev2 = slots[index - 2];

            // Definite-article onset: alif + lam at word start. The start
            // window looks through one proclitic letter (والبيت, عالبيت) but
            // not an ordinary first consonant: حالك keeps its long alif.
            if letter == ALIF && next1 == Slot::Letter(LAM) && at_word_start(prev1, prev2) {
                state.in_definite_article = true;
                if next2.letter().map_or(false, is_sun_letter) {
                    state.next_is_doubled = true;
                }
                phones.push(PhonemeToken::lit("i"));
                continue;
            }

            // The article's lam: silent before a sun letter (the next
            // consonant carries the doubling), /l/ before a moon letter.
            if state.in_definite_article && letter == LAM {
                if state.next_is_doubled {
                    phones.push(PhonemeToken::lit(""));
                } else {
                    phones.push(PhonemeToken::lit("l"));
                }
                state.in_definite_article = false;
                continue;
            }

            // Word-initial alif carrying a short vowel reads as glottal stop
            // plus the plain vowel; the diacritic is consumed here.
            if matches!(letter, ALIF | ALIF_HAMZA_ABOVE | ALIF_HAMZA_BELOW)
                && at_word_start(prev1, prev2)
            {
                if let Some(pair) = next1.letter().and_then(short_vowel) {
                    phones.push(PhonemeToken::lit(GLOTTAL_STOP));
                    phones.push(PhonemeToken::lit(pair.plain));
                    state.skip_next = true;
                    continue;
                }
            }

            let kind = classify(letter);

            // Emphasis spread: emphatic consonants set the sticky flag and
            // plain ones clear it, with ر transparent. Hamza and ta-marbuta
            // clear like plain consonants; vowel letters and the ambiguous
            // ل/و/ي pass the flag through untouched.
            match kind {
                CharKind::Consonant(info) => {
                    if info.emphatic {
                        state.emphatic_context = true;
                    } else if !info.transparent {
                        state.emphatic_context = false;
                    }
                }
                CharKind::Hamza | CharKind::TaMarbuta => state.emphatic_context = false,
                _ => {}
            }

            match kind {
                CharKind::Consonant(info) => {
                    emit_consonant(
                        info.sound_for(self.urban),
                        next1,
                        next2,
                        &mut state,
                        &mut phones,
                    );
                }
                CharKind::Ambiguous(info) => match info.long {
                    // Lam outside the article behaves like any consonant.
                    None => emit_consonant(info.sound, next1, next2, &mut state, &mut phones),
                    // Waw and ya: consonant-triggering neighbors win over
                    // the long-vowel reading.
                    Some(long) => {
                        if next1 == Slot::Letter(SHADDA) {
                            phones.push(PhonemeToken::Literal(doubled(info.sound)));
                            state.skip_next = true;
                        } else if let Some(pair) = vowel_then_shadda(next1, next2) {
                            phones.push(PhonemeToken::Literal(doubled(info.sound)));
                            phones.push(PhonemeToken::lit(pair.select(state.emphatic_context)));
                            state.skip_next = true;
                            state.skip_second = true;
                        } else if prev1 == Slot::Edge
                            || next1 == Slot::Edge
                            || next1 == Slot::Letter(ALIF)
                            || next1.letter().and_then(short_vowel).is_some()
                        {
                            // Absolute word start, word end, or a following
                            // alif/short vowel: the consonant reading. The
                            // vowel itself is emitted on the next step.
                            phones.push(PhonemeToken::lit(info.sound));
                        } else {
                            phones.push(PhonemeToken::lit(long.select(state.emphatic_context)));
                        }
                    }
                },
                CharKind::Shadda => {
                    // Reached only when a silent mark sat between the shadda
                    // and its consonant: double the last emitted consonant.
                    if let Some(PhonemeToken::Literal(last)) = phones.last_mut() {
                        if last.len() == 1 && !is_vowel_phone(last) {
                            let twice = doubled(last);
                            *last = twice;
                        }
                    }
                }
                CharKind::TaMarbuta => {
                    if next1.letter().and_then(short_vowel).is_some() {
                        // Construct state: the linking /t/, vowel follows.
                        phones.push(PhonemeToken::lit("t"));
                    } else if self.simplify_feminine_endings {
                        phones.push(PhonemeToken::lit("e"));
                    } else {
                        phones.push(PhonemeToken::lit("a"));
                    }
                }
                CharKind::LongVowel(pair) => {
                    // A maqsura at word start with its own short vowel
                    // mirrors the initial-alif consumption: nothing to emit.
                    if at_word_start(prev1, prev2)
                        && next1.letter().and_then(short_vowel).is_some()
                    {
                        continue;
                    }
                    phones.push(PhonemeToken::lit(pair.select(state.emphatic_context)));
                }
                CharKind::ShortVowel(pair) => {
                    phones.push(PhonemeToken::lit(pair.select(state.emphatic_context)));
                }
                CharKind::Hamza => {
                    phones.push(PhonemeToken::lit(GLOTTAL_STOP));
                    if let Some(pair) = next1.letter().and_then(short_vowel) {
                        phones.push(PhonemeToken::lit(pair.select(state.emphatic_context)));
                        state.skip_next = true;
                    }
                }
                CharKind::Other => {}
            }
        }

        phones
    }
}

/// Start-of-word test for the onset rules: the first position, or the second
/// when a one-letter proclitic rides in front.
fn at_word_start(prev1: Slot, prev2: Slot) -> bool {
    match (prev1, prev2) {
        (Slot::Edge, _) => true,
        (Slot::Letter(c), Slot::Edge) => is_proclitic(c),
        _ => false,
    }
}

/// Shared consonant emission for rules with gemination lookahead: a direct
/// shadda, a shadda behind one short vowel, a pending article assimilation,
/// or the plain sound.
fn emit_consonant(
    sound: &str,
    next1: Slot,
    next2: Slot,
    state: &mut ScanState,
    phones: &mut Vec<PhonemeToken>,
) {
    if next1 == Slot::Letter(SHADDA) {
        phones.push(PhonemeToken::Literal(doubled(sound)));
        state.skip_next = true;
        // The written shadda already realizes the article's doubling.
        state.next_is_doubled = false;
    } else if let Some(pair) = vowel_then_shadda(next1, next2) {
        // Both mark orders (consonant+shadda+vowel, consonant+vowel+shadda)
        // come out as the doubled consonant followed by the vowel.
        phones.push(PhonemeToken::Literal(doubled(sound)));
        phones.push(PhonemeToken::lit(pair.select(state.emphatic_context)));
        state.skip_next = true;
        state.skip_second = true;
        state.next_is_doubled = false;
    } else if state.next_is_doubled {
        phones.push(PhonemeToken::Literal(doubled(sound)));
        state.next_is_doubled = false;
    } else {
        phones.push(PhonemeToken::lit(sound));
    }
}

/// Short-vowel diacritic directly ahead with the gemination mark behind it.
fn vowel_then_shadda(next1: Slot, next2: Slot) -> Option<VowelPair> {
    if next2 == Slot::Letter(SHADDA) {
        next1.letter().and_then(short_vowel)
    } else {
        None
    }
}

fn doubled(sound: &str) -> String {
    format!("{sound}{sound}")
}

fn is_vowel_phone(phone: &str) -> bool {
    matches!(phone, "a" | "e" | "i" | "o" | "u" | "A" | "I" | "U")
}
