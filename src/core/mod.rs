//! Core domain types for hangman
//!
//! This module contains the letter, word and game-state types. Nothing here performs
//! I/O or draws randomness; the engine layers word selection on top.

mod game;
mod letter;
mod snapshot;
mod word;

pub use game::{Game, GuessResult, KeyState, MAX_GUESSES, Outcome, PLACEHOLDER};
pub use letter::{KEYBOARD_ROWS, Letter, LetterError};
pub use snapshot::GameSnapshot;
pub use word::{MIN_WORD_LENGTH, SecretWord, WordError};
