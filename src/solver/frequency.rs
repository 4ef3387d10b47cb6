//! Letter frequency selection
//!
//! Picks the unguessed letter that appears in the most remaining candidate words.

use super::candidates::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Game, Letter, SecretWord};

/// English letters ordered from most to least frequent
pub const ENGLISH_FREQUENCY_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Count, for each letter, how many candidates contain it at least once
#[must_use]
pub fn letter_counts(candidates: &[&SecretWord]) -> [usize; 26] {
    let mut counts = [0; 26];
    for word in candidates {
        for letter in word.distinct_letters() {
            counts[letter.index()] += 1;
        }
    }
    counts
}

/// Frequency strategy
///
/// Chooses the unguessed letter present in the most candidates, breaking ties
/// alphabetically. Falls back to English letter frequency when no candidate is left
/// (the secret isn't in the word list).
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, game: &Game, words: &[SecretWord]) -> Option<Letter> {
        let candidates = filter_candidates(game, words);
        let counts = letter_counts(&candidates);

        let mut best: Option<(Letter, usize)> = None;
        for letter in Letter::all().filter(|&l| !game.has_guessed(l)) {
            let count = counts[letter.index()];
            if count > 0 && best.is_none_or(|(_, c)| count > c) {
                best = Some((letter, count));
            }
        }

        best.map(|(letter, _)| letter).or_else(|| fallback_letter(game))
    }
}

fn fallback_letter(game: &Game) -> Option<Letter> {
    ENGLISH_FREQUENCY_ORDER
        .chars()
        .filter_map(|c| Letter::new(c).ok())
        .find(|&l| !game.has_guessed(l))
}
