//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::FrequencyStrategy;
use super::candidates::filter_candidates;
use crate::core::{Game, Letter, SecretWord};

/// A strategy for picking the next letter to guess
pub trait Strategy: Sync {
    /// Select the next letter for `game`, knowing the secret is drawn from `words`
    ///
    /// Returns `None` only if every letter has been guessed.
    fn select_letter(&self, game: &Game, words: &[SecretWord]) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among remaining candidates (default)
    Frequency(FrequencyStrategy),
    /// Random letter from the remaining candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, game: &Game, words: &[SecretWord]) -> Option<Letter> {
        match self {
            Self::Frequency(s) => s.select_letter(game, words),
            Self::Random(s) => s.select_letter(game, words),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Random strategy
///
/// Picks a random unguessed letter from the remaining candidates, or any unguessed
/// letter when no candidate is left. A baseline to compare the frequency strategy with.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, game: &Game, words: &[SecretWord]) -> Option<Letter> {
        use rand::prelude::IndexedRandom;

        let candidates = filter_candidates(game, words);
        let mut pool: Vec<Letter> = Letter::all()
            .filter(|&l| !game.has_guessed(l))
            .filter(|&l| candidates.iter().any(|w| w.has_letter(l)))
            .collect();

        if pool.is_empty() {
            pool = Letter::all().filter(|&l| !game.has_guessed(l)).collect();
        }

        pool.choose(&mut rand::rng()).copied()
    }
}
