//! Game engine: word selection plus the current game

use crate::core::{Game, GameSnapshot, GuessResult, Letter, Outcome, SecretWord};
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt;
use tracing::{debug, info, trace};

/// Error type for engine construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    EmptyWordList,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "No qualifying words to choose a secret from"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Owns the word list, the random source and the game in progress
///
/// The word list and random source are injected so tests can seed selection.
pub struct GameEngine<R: Rng = StdRng> {
    words: Vec<SecretWord>,
    rng: R,
    game: Game,
    games_started: usize,
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine and start the first game
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, Outcome, SecretWord};
    /// use hangman::engine::GameEngine;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let words = vec![SecretWord::new("computer").unwrap()];
    /// let mut engine = GameEngine::new(words, StdRng::seed_from_u64(1)).unwrap();
    ///
    /// for c in "COMPUTER".chars() {
    ///     engine.guess_letter(Letter::new(c).unwrap());
    /// }
    /// assert_eq!(engine.status(), Outcome::Win);
    /// ```
    pub fn new(words: Vec<SecretWord>, mut rng: R) -> Result<Self, EngineError> {
        if words.is_empty() {
            return Err(EngineError::EmptyWordList);
        }

        let first = pick(&words, &mut rng).clone();
        let mut engine = Self {
            words,
            rng,
            game: Game::new(first),
            games_started: 0,
        };
        engine.announce();
        Ok(engine)
    }

    /// Start a new game with a secret chosen uniformly at random
    pub fn init(&mut self) {
        let secret = pick(&self.words, &mut self.rng).clone();
        self.init_with(secret);
    }

    /// Start a new game with a chosen secret
    pub fn init_with(&mut self, secret: SecretWord) {
        self.game = Game::new(secret);
        self.announce();
    }

    fn announce(&mut self) {
        self.games_started += 1;
        info!(
            game = self.games_started,
            length = self.game.secret().len(),
            "new game"
        );
        debug!(secret = %self.game.secret(), "secret chosen");
    }

    /// Guess a letter in the current game
    ///
    /// Duplicate letters and guesses after the game is resolved leave the state unchanged.
    pub fn guess_letter(&mut self, letter: Letter) -> GuessResult {
        let result = self.game.guess(letter);

        if result.is_accepted() {
            debug!(
                %letter,
                ?result,
                pattern = %self.game.pattern(),
                incorrect = self.game.incorrect_guesses(),
                "guess"
            );
            if self.game.outcome().is_resolved() {
                info!(
                    outcome = %self.game.outcome(),
                    secret = %self.game.secret(),
                    incorrect = self.game.incorrect_guesses(),
                    "game resolved"
                );
            }
        } else {
            trace!(%letter, ?result, "guess ignored");
        }

        result
    }

    /// Guess from raw character input; non-letters are ignored and return `None`
    pub fn guess_char(&mut self, c: char) -> Option<GuessResult> {
        match Letter::new(c) {
            Ok(letter) => Some(self.guess_letter(letter)),
            Err(err) => {
                trace!(%err, "input ignored");
                None
            }
        }
    }

    /// Outcome of the current game
    #[must_use]
    pub const fn status(&self) -> Outcome {
        self.game.outcome()
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Snapshot of the current game for rendering
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.game)
    }

    /// Number of words a secret can be chosen from
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Games started so far, including the current one
    #[must_use]
    pub const fn games_started(&self) -> usize {
        self.games_started
    }
}

fn pick<'w, R: Rng>(words: &'w [SecretWord], rng: &mut R) -> &'w SecretWord {
    &words[rng.random_range(0..words.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<SecretWord> {
        list.iter().map(|w| SecretWord::new(*w).unwrap()).collect()
    }

    fn engine(list: &[&str], seed: u64) -> GameEngine {
        GameEngine::new(words(list), StdRng::seed_from_u64(seed)).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn empty_word_list_rejected() {
        let result = GameEngine::new(Vec::new(), StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(EngineError::EmptyWordList)));
    }

    #[test]
    fn new_engine_starts_fresh_game() {
        let e = engine(&["computer"], 3);
        assert_eq!(e.status(), Outcome::InProgress);
        assert_eq!(e.game().secret().text(), "COMPUTER");
        assert_eq!(e.game().pattern(), "________");
        assert_eq!(e.games_started(), 1);
    }

    #[test]
    fn same_seed_same_secrets() {
        let list = ["computer", "elephant", "mountain", "keyboard", "sandwich"];
        let mut a = engine(&list, 42);
        let mut b = engine(&list, 42);
        for _ in 0..10 {
            assert_eq!(a.game().secret(), b.game().secret());
            a.init();
            b.init();
        }
    }

    #[test]
    fn selection_covers_word_list() {
        let list = ["computer", "elephant", "mountain"];
        let mut e = engine(&list, 7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(e.game().secret().text().to_string());
            e.init();
        }
        assert_eq!(seen.len(), list.len());
    }

    #[test]
    fn init_resets_state() {
        let mut e = engine(&["computer"], 1);
        for c in "ABDFGHI".chars() {
            e.guess_letter(letter(c));
        }
        assert_eq!(e.status(), Outcome::Loss);

        e.init();
        assert_eq!(e.status(), Outcome::InProgress);
        assert_eq!(e.game().incorrect_guesses(), 0);
        assert!(e.game().guessed().is_empty());
        assert_eq!(e.game().pattern(), "________");
        assert_eq!(e.games_started(), 2);
    }

    #[test]
    fn every_letter_of_secret_wins() {
        let list = ["computer", "elephant", "breathing", "vocabulary"];
        let mut e = engine(&list, 9);
        for _ in 0..20 {
            let secret = e.game().secret().text().to_string();
            for c in secret.chars() {
                e.guess_letter(letter(c));
            }
            assert_eq!(e.status(), Outcome::Win, "{secret}");
            e.init();
        }
    }

    #[test]
    fn absent_letters_lose_at_max() {
        let mut e = engine(&["computer"], 0);
        for (i, c) in "ABDFGHI".chars().enumerate() {
            assert_eq!(e.status(), Outcome::InProgress);
            assert_eq!(e.guess_letter(letter(c)), GuessResult::Miss);
            assert_eq!(usize::from(e.game().incorrect_guesses()), i + 1);
        }
        assert_eq!(e.game().incorrect_guesses(), MAX_GUESSES);
        assert_eq!(e.status(), Outcome::Loss);
    }

    #[test]
    fn resolved_game_is_frozen_until_init() {
        let mut e = engine(&["computer"], 0);
        for c in "COMPUTER".chars() {
            e.guess_letter(letter(c));
        }
        let before = e.snapshot();
        assert_eq!(e.guess_letter(letter('Z')), GuessResult::GameOver);
        assert_eq!(e.snapshot(), before);
    }

    #[test]
    fn init_with_chosen_secret() {
        let mut e = engine(&["computer"], 0);
        e.init_with(SecretWord::new("elephant").unwrap());
        assert_eq!(e.guess_letter(letter('E')), GuessResult::Hit { revealed: 2 });
        assert_eq!(e.game().pattern(), "E_E_____");
    }

    #[test]
    fn guess_char_filters_non_letters() {
        let mut e = engine(&["computer"], 0);
        assert_eq!(e.guess_char('1'), None);
        assert_eq!(e.guess_char(' '), None);
        assert_eq!(e.guess_char('o'), Some(GuessResult::Hit { revealed: 1 }));
        assert_eq!(e.guess_char('O'), Some(GuessResult::AlreadyGuessed));
        assert_eq!(e.game().pattern(), "_O______");
    }

    #[test]
    fn word_count_reported() {
        let e = engine(&["computer", "elephant"], 0);
        assert_eq!(e.word_count(), 2);
    }
}
