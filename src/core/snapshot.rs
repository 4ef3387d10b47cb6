//! Read-only view of a game handed to renderers after every state change

use super::{Game, KeyState, Letter, MAX_GUESSES, Outcome};

/// Everything a view needs to draw the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub word_length: usize,
    pub revealed: Vec<Option<Letter>>,
    pub guessed: Vec<Letter>,
    pub incorrect_guesses: u8,
    pub remaining_guesses: u8,
    pub outcome: Outcome,
    pub last_guess: Option<Letter>,
    /// The secret, only exposed once the game is resolved
    pub answer: Option<String>,
}

impl GameSnapshot {
    #[must_use]
    pub fn of(game: &Game) -> Self {
        Self {
            word_length: game.secret().len(),
            revealed: game.revealed().to_vec(),
            guessed: game.guessed().to_vec(),
            incorrect_guesses: game.incorrect_guesses(),
            remaining_guesses: game.remaining_guesses(),
            outcome: game.outcome(),
            last_guess: game.last_guess(),
            answer: game
                .outcome()
                .is_resolved()
                .then(|| game.secret().text().to_string()),
        }
    }

    /// Index of the gallows drawing, 0 (empty) to `MAX_GUESSES` (complete)
    #[must_use]
    pub fn stage(&self) -> usize {
        usize::from(self.incorrect_guesses.min(MAX_GUESSES))
    }

    /// Whether position `i` holds the most recently guessed letter
    #[must_use]
    pub fn is_fresh(&self, i: usize) -> bool {
        matches!(
            (self.revealed.get(i), self.last_guess),
            (Some(Some(letter)), Some(last)) if *letter == last
        )
    }

    /// Key colouring derived from the guessed letters and revealed positions
    #[must_use]
    pub fn key_state(&self, letter: Letter) -> KeyState {
        if !self.guessed.contains(&letter) {
            KeyState::Unused
        } else if self.revealed.contains(&Some(letter)) {
            KeyState::Correct
        } else {
            KeyState::Incorrect
        }
    }
}
