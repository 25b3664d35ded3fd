// src/core/types.rs
use serde::{Deserialize, Serialize};

/// All rule-consistent readings of one word, space-joined phoneme strings.
/// The first entry is the canonical default; any others are context-ambiguous
/// alternatives in a fixed enumeration order.
pub type Pronunciations = Vec<String>;

/// One position in the emitted phoneme stream.
///
/// A literal carries exactly one phoneme; the empty string marks an elided
/// sound (an assimilated article lam) and is dropped when pronunciations are
/// joined, not at emission time. An alternatives group carries mutually
/// exclusive realizations of the same position, expanded combinatorially
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhonemeToken {
    Literal(String),
    Alternatives(Vec<String>),
}

impl PhonemeToken {
    pub fn lit(phoneme: &str) -> Self {
        PhonemeToken::Literal(phoneme.to_string())
    }
}

/// Dialect settings, fixed at engine construction.
/// Changing them means building a new engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonetiserConfig {
    /// Urban Levantine realizes qaf as a glottal stop; rural keeps /q/.
    pub urban: bool,
    /// Pausal ta-marbuta as /e/ (simplified) instead of /a/.
    pub simplify_feminine_endings: bool,
}

impl Default for PhonetiserConfig {
    fn default() -> Self {
        Self { urban: true, simplify_feminine_endings: true }
    }
}
