//! Simple line mode
//!
//! Text-based game without TUI: type letters, the board is reprinted after every line.

use crate::core::{GuessResult, Outcome};
use crate::engine::GameEngine;
use crate::output::write_board;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Tally of games finished during a line-mode session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub wins: usize,
    pub losses: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::InProgress => {}
        }
    }
}

/// Run line mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing the board.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>) -> io::Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(engine, stdin.lock(), stdout.lock())
}

/// Run line mode over arbitrary input and output
///
/// Every letter on a line is guessed in order; anything else is ignored. `new` starts a
/// new game, `quit` (or end of input) ends the session.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_session<R: Rng, I: BufRead, W: Write>(
    engine: &mut GameEngine<R>,
    input: I,
    mut out: W,
) -> io::Result<SessionSummary> {
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║            Hangman - Line Mode           ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝")?;
    writeln!(
        out,
        "Type letters to guess. Commands: 'new' for a new game, 'quit' to exit."
    )?;

    let mut summary = SessionSummary::default();
    write_board(&mut out, &engine.snapshot())?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "quit" | "exit" => break,
            "new" | "restart" => {
                engine.init();
                writeln!(out, "\nNew game started!")?;
            }
            _ => {
                let was_resolved = engine.status().is_resolved();
                for c in command.chars() {
                    match engine.guess_char(c) {
                        Some(GuessResult::AlreadyGuessed) => {
                            writeln!(out, "'{}' was already guessed", c.to_ascii_uppercase())?;
                        }
                        Some(GuessResult::GameOver) => {
                            writeln!(out, "The game is over. Type 'new' to play again.")?;
                            break;
                        }
                        _ => {}
                    }
                }
                if !was_resolved {
                    summary.record(engine.status());
                }
            }
        }

        write_board(&mut out, &engine.snapshot())?;
        out.flush()?;
    }

    writeln!(
        out,
        "\nThanks for playing! Won {}, lost {}.",
        summary.wins, summary.losses
    )?;
    Ok(summary)
}
