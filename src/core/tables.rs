// src/core/tables.rs
//
// Static classification of the Arabic codepoints the engine understands.
// Every per-character decision in the scanner goes through `classify`; the
// only raw character comparisons elsewhere are positional patterns (the
// alif+lam article onset and the word-initial alif set).

pub const HAMZA: char = '\u{0621}'; // ء
pub const ALIF_MADDA: char = '\u{0622}'; // آ
pub const ALIF_HAMZA_ABOVE: char = '\u{0623}'; // أ
pub const WAW_HAMZA: char = '\u{0624}'; // ؤ
pub const ALIF_HAMZA_BELOW: char = '\u{0625}'; // إ
pub const YA_HAMZA: char = '\u{0626}'; // ئ
pub const ALIF: char = '\u{0627}'; // ا
pub const TA_MARBUTA: char = '\u{0629}'; // ة
pub const QAF: char = '\u{0642}'; // ق
pub const LAM: char = '\u{0644}'; // ل
pub const NUN: char = '\u{0646}'; // ن
pub const WAW: char = '\u{0648}'; // و
pub const ALIF_MAQSURA: char = '\u{0649}'; // ى
pub const YA: char = '\u{064a}'; // ي
pub const FATHATAYN: char = '\u{064b}'; // ً
pub const DAMMATAYN: char = '\u{064c}'; // ٌ
pub const KASRATAYN: char = '\u{064d}'; // ٍ
pub const FATHA: char = '\u{064e}'; // َ
pub const DAMMA: char = '\u{064f}'; // ُ
pub const KASRA: char = '\u{0650}'; // ِ
pub const SHADDA: char = '\u{0651}'; // ّ
pub const SUKUN: char = '\u{0652}'; // ْ
pub const TATWEEL: char = '\u{0640}'; // ـ

/// The glottal stop phoneme shared by all hamza variants.
pub const GLOTTAL_STOP: &str = "'";

/// A plain/emphatic pair of vowel phonemes; which side is emitted depends on
/// the scanner's emphatic-context flag at emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelPair {
    pub plain: &'static str,
    pub emphatic: &'static str,
}

impl VowelPair {
    pub fn select(&self, emphatic: bool) -> &'static str {
        if emphatic {
            self.emphatic
        } else {
            self.plain
        }
    }
}

/// A consonant with a single, context-independent realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsonantInfo {
    pub sound: &'static str,
    /// Alternate realization under the urban dialect setting (qaf only).
    pub urban_sound: Option<&'static str>,
    /// Colors following vowels toward their emphatic alternants.
    pub emphatic: bool,
    /// Assimilates the definite article's lam.
    pub sun: bool,
    /// Does not reset the emphatic context (ر).
    pub transparent: bool,
}

impl ConsonantInfo {
    pub fn sound_for(&self, urban: bool) -> &'static str {
        match self.urban_sound {
            Some(sound) if urban => sound,
            _ => self.sound,
        }
    }
}

/// A letter whose reading depends on its neighbors: lam (article-sensitive)
/// and waw/ya (consonant or long vowel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousInfo {
    /// Realization when the letter acts as a consonant.
    pub sound: &'static str,
    /// Long-vowel reading for waw/ya; lam has none.
    pub long: Option<VowelPair>,
    pub sun: bool,
}

/// What one codepoint is, independent of context. Exactly one kind per
/// codepoint; everything the scanner's rules need hangs off the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Consonant(ConsonantInfo),
    Ambiguous(AmbiguousInfo),
    TaMarbuta,
    Hamza,
    LongVowel(VowelPair),
    ShortVowel(VowelPair),
    Shadda,
    Other,
}

const fn plain(sound: &'static str) -> CharKind {
    CharKind::Consonant(ConsonantInfo {
        sound,
        urban_sound: None,
        emphatic: false,
        sun: false,
        transparent: false,
    })
}

const fn sun(sound: &'static str) -> CharKind {
    CharKind::Consonant(ConsonantInfo {
        sound,
        urban_sound: None,
        emphatic: false,
        sun: true,
        transparent: false,
    })
}

const fn emphatic(sound: &'static str) -> CharKind {
    CharKind::Consonant(ConsonantInfo {
        sound,
        urban_sound: None,
        emphatic: true,
        sun: false,
        transparent: false,
    })
}

const fn emphatic_sun(sound: &'static str) -> CharKind {
    CharKind::Consonant(ConsonantInfo {
        sound,
        urban_sound: None,
        emphatic: true,
        sun: true,
        transparent: false,
    })
}

const LONG_AA: VowelPair = VowelPair { plain: "aa", emphatic: "AA" };
const LONG_UU: VowelPair = VowelPair { plain: "uu", emphatic: "UU" };
const LONG_II: VowelPair = VowelPair { plain: "ii", emphatic: "II" };

/// Classify one codepoint. Total over `char`; anything outside the known
/// inventory is `Other` and the scanner skips it.
pub fn classify(c: char) -> CharKind {
    match c {
        // Unambiguous consonants, colloquial Levantine values: the
        // interdentals shift (ث→s, ذ→z, ظ→z) and ق varies by dialect.
        'ب' => plain("b"),
        'ت' => sun("t"),
        'ث' => sun("s"),
        'ج' => plain("j"),
        'ح' => plain("H"),
        'خ' => emphatic("x"),
        'د' => sun("d"),
        'ذ' => sun("z"),
        'ر' => CharKind::Consonant(ConsonantInfo {
            sound: "r",
            urban_sound: None,
            emphatic: false,
            sun: true,
            transparent: true,
        }),
        'ز' => sun("z"),
        'س' => sun("s"),
        'ش' => sun("$"),
        'ص' => emphatic_sun("S"),
        'ض' => emphatic_sun("D"),
        'ط' => emphatic_sun("T"),
        'ظ' => emphatic_sun("z"),
        'ع' => plain("E"),
        'غ' => emphatic("g"),
        'ف' => plain("f"),
        'ق' => CharKind::Consonant(ConsonantInfo {
            sound: "q",
            urban_sound: Some(GLOTTAL_STOP),
            emphatic: true,
            sun: false,
            transparent: false,
        }),
        'ك' => plain("k"),
        'م' => plain("m"),
        'ن' => sun("n"),
        'ه' => plain("h"),

        // Context-dependent letters.
        'ل' => CharKind::Ambiguous(AmbiguousInfo { sound: "l", long: None, sun: true }),
        'و' => CharKind::Ambiguous(AmbiguousInfo { sound: "w", long: Some(LONG_UU), sun: false }),
        'ي' => CharKind::Ambiguous(AmbiguousInfo { sound: "y", long: Some(LONG_II), sun: false }),

        'ة' => CharKind::TaMarbuta,

        // Hamza variants all realize as the glottal stop.
        'ء' | 'أ' | 'إ' | 'ؤ' | 'ئ' => CharKind::Hamza,

        // Long-vowel letters.
        'ا' | 'ى' => CharKind::LongVowel(LONG_AA),

        // Short-vowel diacritics.
        'َ' => CharKind::ShortVowel(VowelPair { plain: "a", emphatic: "A" }),
        'ُ' => CharKind::ShortVowel(VowelPair { plain: "u", emphatic: "U" }),
        'ِ' => CharKind::ShortVowel(VowelPair { plain: "i", emphatic: "I" }),

        'ّ' => CharKind::Shadda,

        // Sukun, tanwin leftovers, tatweel, Latin text, digits, punctuation:
        // no phonetic contribution, silently skipped.
        _ => CharKind::Other,
    }
}

/// True for the coronal consonants that assimilate the article's lam.
pub fn is_sun_letter(c: char) -> bool {
    match classify(c) {
        CharKind::Consonant(info) => info.sun,
        CharKind::Ambiguous(info) => info.sun,
        _ => false,
    }
}

/// One-letter proclitics (و ف ب ك and the colloquial ع) that can ride in
/// front of a word. The preposition ل is not among them: fused with the
/// article it loses the alif in writing.
pub fn is_proclitic(c: char) -> bool {
    matches!(c, 'و' | 'ف' | 'ب' | 'ك' | 'ع')
}

/// The plain/emphatic pair for a short-vowel diacritic, if `c` is one.
pub fn short_vowel(c: char) -> Option<VowelPair> {
    match classify(c) {
        CharKind::ShortVowel(pair) => Some(pair),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qaf_carries_both_realizations() {
        let CharKind::Consonant(info) = classify(QAF) else {
            panic!("qaf must classify as a consonant");
        };
        assert_eq!(info.sound_for(true), "'");
        assert_eq!(info.sound_for(false), "q");
        assert!(info.emphatic);
    }

    #[test]
    fn sun_letters_match_the_coronal_set() {
        for c in ['ت', 'ث', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ل', 'ن'] {
            assert!(is_sun_letter(c), "{c} should be a sun letter");
        }
        for c in ['ب', 'ج', 'ح', 'خ', 'ع', 'غ', 'ف', 'ق', 'ك', 'م', 'ه', 'و', 'ي', 'ا'] {
            assert!(!is_sun_letter(c), "{c} should be a moon letter");
        }
    }

    #[test]
    fn proclitics_are_the_attachable_particles() {
        for c in ['و', 'ف', 'ب', 'ك', 'ع'] {
            assert!(is_proclitic(c), "{c} should be a proclitic");
        }
        for c in ['ح', 'م', 'س', 'ل', 'ا'] {
            assert!(!is_proclitic(c), "{c} should not be a proclitic");
        }
    }

    #[test]
    fn emphatic_consonants_color_vowels() {
        for c in ['ص', 'ض', 'ط', 'ظ', 'غ', 'خ', 'ق'] {
            match classify(c) {
                CharKind::Consonant(info) => assert!(info.emphatic, "{c} should be emphatic"),
                other => panic!("{c} classified as {other:?}"),
            }
        }
        match classify('س') {
            CharKind::Consonant(info) => assert!(!info.emphatic),
            other => panic!("س classified as {other:?}"),
        }
    }

    #[test]
    fn ra_is_transparent_to_emphasis() {
        match classify('ر') {
            CharKind::Consonant(info) => assert!(info.transparent),
            other => panic!("ر classified as {other:?}"),
        }
        match classify('ب') {
            CharKind::Consonant(info) => assert!(!info.transparent),
            other => panic!("ب classified as {other:?}"),
        }
    }

    #[test]
    fn short_vowels_pair_with_emphatic_alternants() {
        assert_eq!(short_vowel(FATHA), Some(VowelPair { plain: "a", emphatic: "A" }));
        assert_eq!(short_vowel(DAMMA), Some(VowelPair { plain: "u", emphatic: "U" }));
        assert_eq!(short_vowel(KASRA), Some(VowelPair { plain: "i", emphatic: "I" }));
        assert_eq!(short_vowel(SUKUN), None);
        assert_eq!(short_vowel(ALIF), None);
    }

    #[test]
    fn long_vowel_letters_share_the_aa_pair() {
        assert_eq!(classify(ALIF), classify(ALIF_MAQSURA));
        match classify(ALIF) {
            CharKind::LongVowel(pair) => {
                assert_eq!(pair.select(false), "aa");
                assert_eq!(pair.select(true), "AA");
            }
            other => panic!("ا classified as {other:?}"),
        }
    }

    #[test]
    fn silent_marks_are_ignored() {
        for c in [SUKUN, TATWEEL, FATHATAYN, DAMMATAYN, KASRATAYN, 'x', '7', '-', ALIF_MADDA] {
            assert_eq!(classify(c), CharKind::Other, "{c:?} should be ignored");
        }
    }

    #[test]
    fn every_hamza_variant_is_a_glottal_stop() {
        for c in [HAMZA, ALIF_HAMZA_ABOVE, ALIF_HAMZA_BELOW, WAW_HAMZA, YA_HAMZA] {
            assert_eq!(classify(c), CharKind::Hamza);
        }
    }
}
