//! Word lists for hangman
//!
//! Provides the embedded common-word list and the length filter that decides which
//! words can be secrets.

mod embedded;
pub mod loader;

use crate::core::SecretWord;
use rustc_hash::FxHashSet;
use tracing::info;

pub use embedded::{COMMON_WORDS, COMMON_WORDS_COUNT};

/// Keep only words of at least `min_length` letters, dropping repeats
#[must_use]
pub fn qualifying_words(words: Vec<SecretWord>, min_length: usize) -> Vec<SecretWord> {
    let total = words.len();
    let mut seen = FxHashSet::default();
    let qualifying: Vec<SecretWord> = words
        .into_iter()
        .filter(|w| w.qualifies(min_length))
        .filter(|w| seen.insert(w.text().to_string()))
        .collect();

    info!(
        total,
        qualifying = qualifying.len(),
        min_length,
        "word list filtered"
    );
    qualifying
}
