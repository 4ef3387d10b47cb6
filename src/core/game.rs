//! Hangman game state machine
//!
//! Pure state transitions: no randomness, no I/O, no presentation.

use super::{Letter, SecretWord};
use std::fmt;

/// Number of incorrect guesses that loses the game
pub const MAX_GUESSES: u8 = 7;

/// Character shown for a letter that hasn't been revealed yet
pub const PLACEHOLDER: char = '_';

/// Result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win,
    Loss,
}

impl Outcome {
    /// Win and loss are terminal
    #[inline]
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in-progress",
            Self::Win => "win",
            Self::Loss => "loss",
        };
        f.write_str(text)
    }
}

/// What a single call to [`Game::guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter is in the word; `revealed` positions were uncovered
    Hit { revealed: usize },
    /// Letter is not in the word
    Miss,
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
    /// Game is already won or lost; nothing changed
    GameOver,
}

impl GuessResult {
    /// Whether the guess mutated the game
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Hit { .. } | Self::Miss)
    }
}

/// Colouring of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Incorrect,
}

/// State of one hangman game
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    revealed: Vec<Option<Letter>>,
    guessed: Vec<Letter>,
    guessed_mask: u32,
    incorrect: u8,
    outcome: Outcome,
}

impl Game {
    /// Start a game for the given secret
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, Letter, Outcome, SecretWord};
    ///
    /// let mut game = Game::new(SecretWord::new("computer").unwrap());
    /// game.guess(Letter::new('o').unwrap());
    /// assert_eq!(game.pattern(), "_O______");
    /// assert_eq!(game.outcome(), Outcome::InProgress);
    /// ```
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        let revealed = vec![None; secret.len()];
        Self {
            secret,
            revealed,
            guessed: Vec::new(),
            guessed_mask: 0,
            incorrect: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Apply a letter guess
    ///
    /// Ignored once the game is resolved, and for letters already guessed. Otherwise the
    /// letter is recorded, revealed at every matching position or counted as incorrect,
    /// and the outcome is recomputed.
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        if self.outcome.is_resolved() {
            return GuessResult::GameOver;
        }
        if self.has_guessed(letter) {
            return GuessResult::AlreadyGuessed;
        }

        self.guessed.push(letter);
        self.guessed_mask |= 1 << letter.index();

        let positions = self.secret.positions_of(letter);
        let result = if positions.is_empty() {
            self.incorrect += 1;
            GuessResult::Miss
        } else {
            for &i in positions {
                self.revealed[i] = Some(letter);
            }
            GuessResult::Hit {
                revealed: positions.len(),
            }
        };

        self.outcome = self.compute_outcome();
        result
    }

    fn compute_outcome(&self) -> Outcome {
        if self.incorrect >= MAX_GUESSES {
            Outcome::Loss
        } else if self.revealed.iter().all(Option::is_some) {
            Outcome::Win
        } else {
            Outcome::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Per-position revealed letters, `None` where still hidden
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[Option<Letter>] {
        &self.revealed
    }

    /// Revealed pattern with [`PLACEHOLDER`] for hidden positions, e.g. `_O______`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, Letter::as_char))
            .collect()
    }

    /// Guessed letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed_mask & (1 << letter.index()) != 0
    }

    /// Most recently guessed letter
    #[must_use]
    pub fn last_guess(&self) -> Option<Letter> {
        self.guessed.last().copied()
    }

    /// Guessed letters that are not in the word, in guess order
    pub fn wrong_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|&l| !self.secret.has_letter(l))
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_guesses(&self) -> u8 {
        self.incorrect
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u8 {
        MAX_GUESSES.saturating_sub(self.incorrect)
    }

    /// Colour of the keyboard key for `letter`
    #[must_use]
    pub fn key_state(&self, letter: Letter) -> KeyState {
        if !self.has_guessed(letter) {
            KeyState::Unused
        } else if self.secret.has_letter(letter) {
            KeyState::Correct
        } else {
            KeyState::Incorrect
        }
    }
}
