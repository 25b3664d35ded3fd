// src/core/expand.rs

use crate::core::types::PhonemeToken;

/// Expand a token sequence into every concrete pronunciation string.
///
/// Alternative groups multiply: the result enumerates their cartesian
/// product in mixed-radix order, with the first group in emission order as
/// the fastest-cycling digit, so entry 0 takes variant 0 of every group and
/// is the canonical reading. Elided (empty) phones are dropped before
/// joining, duplicates are dropped after, first occurrence kept. A
/// combination that elides everything joins to the empty string and is
/// dropped with them.
pub fn expand(tokens: &[PhonemeToken]) -> Vec<String> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut combinations = 1usize;
    for token in tokens {
        if let PhonemeToken::Alternatives(choices) = token {
            combinations *= choices.len();
        }
    }

    let mut sequences: Vec<Vec<&str>> = vec![Vec::new(); combinations];
    let mut period = 1usize;
    for token in tokens {
        match token {
            PhonemeToken::Literal(phone) => {
                if !phone.is_empty() {
                    for sequence in sequences.iter_mut() {
                        sequence.push(phone);
                    }
                }
            }
            PhonemeToken::Alternatives(choices) => {
                for (i, sequence) in sequences.iter_mut().enumerate() {
                    let choice = &choices[(i / period) % choices.len()];
                    if !choice.is_empty() {
                        sequence.push(choice);
                    }
                }
                period *= choices.len();
            }
        }
    }

    let mut pronunciations: Vec<String> = Vec::new();
    for sequence in sequences {
        let joined = sequence.join(" ");
        if !joined.is_empty() && !pronunciations.contains(&joined) {
            pronunciations.push(joined);
        }
    }
    pronunciations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(phone: &str) -> PhonemeToken {
        PhonemeToken::lit(phone)
    }

    fn alts(choices: &[&str]) -> PhonemeToken {
        PhonemeToken::Alternatives(choices.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn literal_sequences_join_with_single_spaces() {
        let tokens = [lit("b"), lit("ii"), lit("t")];
        assert_eq!(expand(&tokens), ["b ii t"]);
    }

    #[test]
    fn empty_input_expands_to_nothing() {
        assert_eq!(expand(&[]), Vec::<String>::new());
    }

    #[test]
    fn elided_literals_vanish_from_the_join() {
        let tokens = [lit("i"), lit(""), lit("$$"), lit("m"), lit("s")];
        assert_eq!(expand(&tokens), ["i $$ m s"]);
    }

    #[test]
    fn groups_enumerate_in_mixed_radix_order() {
        // First group cycles fastest; variant 0 everywhere comes first.
        let tokens = [alts(&["a", "b"]), lit("-"), alts(&["1", "2"])];
        assert_eq!(expand(&tokens), ["a - 1", "b - 1", "a - 2", "b - 2"]);
    }

    #[test]
    fn elidable_group_member_shortens_that_reading() {
        let tokens = [lit("i"), alts(&["l", ""]), lit("b")];
        assert_eq!(expand(&tokens), ["i l b", "i b"]);
    }

    #[test]
    fn duplicate_readings_collapse_to_first_occurrence() {
        // Both group choices elide, so every combination joins identically.
        let tokens = [lit("h"), alts(&["", ""]), lit("a")];
        assert_eq!(expand(&tokens), ["h a"]);
    }

    #[test]
    fn fully_elided_combinations_are_dropped() {
        let tokens = [lit(""), alts(&["", "x"])];
        assert_eq!(expand(&tokens), ["x"]);
    }

    #[test]
    fn no_reading_contains_an_empty_phone() {
        let tokens = [lit("k"), alts(&["", "y"]), lit("f")];
        for pronunciation in expand(&tokens) {
            assert!(pronunciation.split(' ').all(|phone| !phone.is_empty()));
        }
    }
}
