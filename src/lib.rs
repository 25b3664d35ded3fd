// src/lib.rs

pub mod c_api;
pub mod core;
pub mod lexicon;
pub mod persistence;
pub mod translit;

pub use crate::core::engine::{phonetise, primary_phonemes, Phonetiser};
pub use crate::core::types::{PhonemeToken, PhonetiserConfig, Pronunciations};
pub use crate::lexicon::FixedLexicon;
