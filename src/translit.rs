// src/translit.rs

/// Buckwalter transliteration of Arabic script, an ASCII encoding used for
/// lexicon orthography fields and debugging output. Characters without a
/// Buckwalter cell pass through unchanged; pass-through output can collide
/// with mapped letters, so the encoding does not round-trip.
pub fn to_buckwalter(word: &str) -> String {
    word.chars().map(|c| buckwalter_letter(c).unwrap_or(c)).collect()
}

fn buckwalter_letter(c: char) -> Option<char> {
    match c {
        // Base letters.
        'ا' => Some('A'), 'ب' => Some('b'), 'ت' => Some('t'), 'ث' => Some('^'),
        'ج' => Some('j'), 'ح' => Some('H'), 'خ' => Some('x'), 'د' => Some('d'),
        'ذ' => Some('*'), 'ر' => Some('r'), 'ز' => Some('z'), 'س' => Some('s'),
        'ش' => Some('$'), 'ص' => Some('S'), 'ض' => Some('D'), 'ط' => Some('T'),
        'ظ' => Some('Z'), 'ع' => Some('E'), 'غ' => Some('g'), 'ف' => Some('f'),
        'ق' => Some('q'), 'ك' => Some('k'), 'ل' => Some('l'), 'م' => Some('m'),
        'ن' => Some('n'), 'ه' => Some('h'), 'و' => Some('w'), 'ي' => Some('y'),
        // Hamza carriers, madda, ta-marbuta.
        'آ' => Some('|'), 'أ' => Some('>'), 'ء' => Some('\''), 'ئ' => Some('}'),
        'ؤ' => Some('&'), 'إ' => Some('<'), 'ة' => Some('p'),
        // Diacritics.
        'ً' => Some('F'), 'ٌ' => Some('N'), 'ٍ' => Some('K'), 'َ' => Some('a'),
        'ُ' => Some('u'), 'ِ' => Some('i'), 'ّ' => Some('~'), 'ْ' => Some('o'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_bare_words() {
        assert_eq!(to_buckwalter("كتاب"), "ktAb");
        assert_eq!(to_buckwalter("الشمس"), "Al$ms");
    }

    #[test]
    fn covers_every_hamza_carrier() {
        assert_eq!(to_buckwalter("ءأإآؤئ"), "'><|&}");
    }

    #[test]
    fn diacritics_map_to_ascii() {
        // مُدَرِّسَة with full vocalization.
        assert_eq!(
            to_buckwalter("\u{645}\u{64f}\u{62f}\u{64e}\u{631}\u{651}\u{650}\u{633}\u{64e}\u{629}"),
            "mudar~isap"
        );
        assert_eq!(to_buckwalter("\u{643}\u{64b}"), "kF");
        assert_eq!(to_buckwalter("\u{628}\u{652}"), "bo");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(to_buckwalter("abc 123"), "abc 123");
        // Alif maqsura has no cell in this table and survives as itself.
        assert_eq!(to_buckwalter("مشى"), "m$\u{649}");
        // Pass-through Latin lands on the same letters mapped Arabic does.
        assert_eq!(to_buckwalter("r"), to_buckwalter("ر"));
    }
}
