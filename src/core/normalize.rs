// src/core/normalize.rs
use crate::core::tables::TATWEEL;

// Two-codepoint rewrite patterns, spelled out as escapes because combining
// marks make the literal forms unreadable in source.
const ALIF_FATHATAYN: &str = "\u{0627}\u{064b}"; // اً
const FATHATAYN: &str = "\u{064b}";
const FATHA_ALIF: &str = "\u{064e}\u{0627}"; // َا
const ALIF_STR: &str = "\u{0627}";
const FATHA_MAQSURA: &str = "\u{064e}\u{0649}"; // َى
const MAQSURA_STR: &str = "\u{0649}";
const SPACE_ALIF: &str = " \u{0627}";
const DAMMATAYN: &str = "\u{064c}";
const KASRATAYN: &str = "\u{064d}";
const FATHA_NUN: &str = "\u{064e}\u{0646}"; // َن
const DAMMA_NUN: &str = "\u{064f}\u{0646}"; // ُن
const KASRA_NUN: &str = "\u{0650}\u{0646}"; // ِن
const ALIF_MADDA_STR: &str = "\u{0622}";
const HAMZA_ALIF: &str = "\u{0623}\u{0627}"; // أا

/// Rewrite raw Arabic text into the canonical diacritic form the scanner
/// expects. Applied per word by the engine, but total over any text.
///
/// The rewrite order is fixed; later steps consume the output of earlier
/// ones:
/// 1. strip tatweel elongation marks;
/// 2. collapse alif + fathatayn to the bare fathatayn;
/// 3. collapse fatha + alif (and fatha + alif-maqsura) to the long-vowel
///    letter alone;
/// 4. drop a standalone alif after a space (old-orthography artifact);
/// 5. expand the three tanwin marks to short vowel + nun;
/// 6. expand alif-madda to hamza + alif.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    text.replace(TATWEEL, "")
        .replace(ALIF_FATHATAYN, FATHATAYN)
        .replace(FATHA_ALIF, ALIF_STR)
        .replace(FATHA_MAQSURA, MAQSURA_STR)
        .replace(SPACE_ALIF, " ")
        .replace(FATHATAYN, FATHA_NUN)
        .replace(DAMMATAYN, DAMMA_NUN)
        .replace(KASRATAYN, KASRA_NUN)
        .replace(ALIF_MADDA_STR, HAMZA_ALIF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tatweel() {
        assert_eq!(normalize("كـتاب"), "كتاب");
    }

    #[test]
    fn collapses_fatha_before_long_vowel_letters() {
        // قَال: the fatha is redundant before its alif.
        assert_eq!(normalize("\u{642}\u{64e}\u{627}\u{644}"), "قال");
        // عَلَى: only the fatha sitting on the maqsura collapses.
        assert_eq!(
            normalize("\u{639}\u{64e}\u{644}\u{64e}\u{649}"),
            "\u{639}\u{64e}\u{644}\u{649}"
        );
    }

    #[test]
    fn expands_nunation_to_vowel_plus_nun() {
        // مثلاً: the alif carrying the fathatayn folds away first.
        assert_eq!(
            normalize("\u{645}\u{62b}\u{644}\u{627}\u{64b}"),
            "\u{645}\u{62b}\u{644}\u{64e}\u{646}"
        );
        assert_eq!(normalize("\u{628}\u{64c}"), "\u{628}\u{64f}\u{646}");
        assert_eq!(normalize("\u{628}\u{64d}"), "\u{628}\u{650}\u{646}");
    }

    #[test]
    fn expands_madda() {
        assert_eq!(normalize("آمين"), "\u{623}\u{627}مين");
    }

    #[test]
    fn drops_standalone_alif_after_space() {
        assert_eq!(normalize("قالو ا"), "قالو ");
    }

    #[test]
    fn leaves_plain_words_alone() {
        for word in ["بيت", "كيف", "هادا", "شمس"] {
            assert_eq!(normalize(word), word);
        }
    }

    #[test]
    fn idempotent_over_representative_inputs() {
        let samples = [
            "كـتاب",
            "\u{645}\u{62b}\u{644}\u{627}\u{64b}",
            "آمين",
            "\u{642}\u{64e}\u{627}\u{644}",
            "بِدِّي",
            "الشمس",
            "hello مرحبا 123",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize must be idempotent for {s:?}");
        }
    }
}
