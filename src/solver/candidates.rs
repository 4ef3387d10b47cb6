//! Candidate filtering
//!
//! Narrows a word list to the words that could still be the secret of a game.

use crate::core::{Game, SecretWord};

/// Check whether `word` is consistent with everything the game has revealed
///
/// A candidate has the secret's length, matches every revealed position, and has no
/// guessed letter at a hidden position (a guessed letter is revealed everywhere it
/// occurs, and a wrong letter occurs nowhere).
#[must_use]
pub fn is_candidate(game: &Game, word: &SecretWord) -> bool {
    if word.len() != game.secret().len() {
        return false;
    }

    word.bytes()
        .iter()
        .zip(game.revealed())
        .all(|(&b, slot)| match slot {
            Some(letter) => letter.byte() == b,
            None => !game.guessed().iter().any(|g| g.byte() == b),
        })
}

/// Filter `words` to the candidates for `game`
#[must_use]
pub fn filter_candidates<'a>(game: &Game, words: &'a [SecretWord]) -> Vec<&'a SecretWord> {
    words.iter().filter(|w| is_candidate(game, w)).collect()
}
