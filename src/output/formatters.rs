//! Formatting utilities shared by the terminal views

use crate::core::{GameSnapshot, MAX_GUESSES, Outcome, PLACEHOLDER};

/// Gallows drawings, indexed by incorrect guess count
pub const GALLOWS: [[&str; 7]; MAX_GUESSES as usize + 1] = [
    [
        "  +----+ ",
        "  |    | ",
        "       | ",
        "       | ",
        "       | ",
        "       | ",
        "=========",
    ],
    [
        "  +----+ ",
        "  |    | ",
        "  O    | ",
        "       | ",
        "       | ",
        "       | ",
        "=========",
    ],
    [
        "  +----+ ",
        "  |    | ",
        "  O    | ",
        "  |    | ",
        "       | ",
        "       | ",
        "=========",
    ],
    [
        "  +----+ ",
        "  |    | ",
        "  O    | ",
        " /|    | ",
        "       | ",
        "       | ",
        "=========",
    ],
    [
        "  +----+ ",
        "  |    | ",
        "  O    | ",
        " /|\\   | ",
        "       | ",
        "       | ",
        "=========",
    ],
    [
        "  +----+ ",
        "  |    | ",
        "  O    | ",
        " /|\\   | ",
        " /     | ",
        "       | ",
        "=========",
    ],
    [
        "  +----+ ",
        "  |    | ",
        "  O    | ",
        " /|\\   | ",
        " / \\   | ",
        "       | ",
        "=========",
    ],
    [
        "  +----+ ",
        "  |    | ",
        "  X    | ",
        " /|\\   | ",
        " / \\   | ",
        "       | ",
        "=========",
    ],
];

/// Gallows drawing for the snapshot's incorrect guess count
#[must_use]
pub fn gallows(snapshot: &GameSnapshot) -> &'static [&'static str; 7] {
    &GALLOWS[snapshot.stage()]
}

/// Revealed pattern with spaces between positions, e.g. `C _ M _ _ _ _ _`
#[must_use]
pub fn spaced_pattern(snapshot: &GameSnapshot) -> String {
    let mut result = String::with_capacity(snapshot.word_length * 2);
    for (i, slot) in snapshot.revealed.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(slot.map_or(PLACEHOLDER, |l| l.as_char()));
    }
    result
}

/// "N guesses remaining"
#[must_use]
pub fn remaining_label(remaining: u8) -> String {
    if remaining == 1 {
        "1 guess remaining".to_string()
    } else {
        format!("{remaining} guesses remaining")
    }
}

/// Status line for an outcome
#[must_use]
pub const fn status_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "Guess a letter:",
        Outcome::Win => "You win!",
        Outcome::Loss => "Game Over!",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, Letter, SecretWord};

    fn snapshot_after(secret: &str, guesses: &str) -> GameSnapshot {
        let mut game = Game::new(SecretWord::new(secret).unwrap());
        for c in guesses.chars() {
            game.guess(Letter::new(c).unwrap());
        }
        GameSnapshot::of(&game)
    }

    #[test]
    fn gallows_frames_same_height_and_width() {
        for frame in &GALLOWS {
            for line in frame {
                assert_eq!(line.chars().count(), GALLOWS[0][0].chars().count());
            }
        }
    }

    #[test]
    fn gallows_follows_incorrect_count() {
        assert_eq!(gallows(&snapshot_after("computer", "")), &GALLOWS[0]);
        assert_eq!(gallows(&snapshot_after("computer", "ZC")), &GALLOWS[1]);
        assert_eq!(gallows(&snapshot_after("computer", "ABDFGHI")), &GALLOWS[7]);
    }

    #[test]
    fn spaced_pattern_blank_and_partial() {
        assert_eq!(
            spaced_pattern(&snapshot_after("computer", "")),
            "_ _ _ _ _ _ _ _"
        );
        assert_eq!(
            spaced_pattern(&snapshot_after("elephant", "E")),
            "E _ E _ _ _ _ _"
        );
    }

    #[test]
    fn remaining_label_pluralizes() {
        assert_eq!(remaining_label(7), "7 guesses remaining");
        assert_eq!(remaining_label(1), "1 guess remaining");
        assert_eq!(remaining_label(0), "0 guesses remaining");
    }

    #[test]
    fn status_messages() {
        assert_eq!(status_message(Outcome::InProgress), "Guess a letter:");
        assert_eq!(status_message(Outcome::Win), "You win!");
        assert_eq!(status_message(Outcome::Loss), "Game Over!");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
