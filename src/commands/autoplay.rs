//! Autoplay - strategy evaluation
//!
//! Plays a strategy against every qualifying word and gathers statistics.

use crate::core::{Game, MAX_GUESSES, Outcome, SecretWord};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Result from playing a single word
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub word: String,
    pub guesses: String,
    pub incorrect: u8,
    pub won: bool,
}

/// Statistics from an autoplay run
#[derive(Debug)]
pub struct AutoplayStatistics {
    pub strategy: &'static str,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// `incorrect_distribution[n]` = games won with exactly `n` incorrect guesses
    pub incorrect_distribution: [usize; MAX_GUESSES as usize],
    pub average_incorrect: f64,
    pub hardest_words: Vec<(String, u8)>,
    pub lost_words: Vec<String>,
    pub total_time: Duration,
}

impl AutoplayStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Play one game to completion with `strategy`
pub fn play_game<S: Strategy + ?Sized>(
    strategy: &S,
    secret: &SecretWord,
    words: &[SecretWord],
) -> GameRecord {
    let mut game = Game::new(secret.clone());

    while !game.outcome().is_resolved() {
        let Some(letter) = strategy.select_letter(&game, words) else {
            break;
        };
        game.guess(letter);
    }

    GameRecord {
        word: secret.text().to_string(),
        guesses: game.guessed().iter().map(|l| l.as_char()).collect(),
        incorrect: game.incorrect_guesses(),
        won: game.outcome() == Outcome::Win,
    }
}

/// Run `strategy` against every word (or the first `limit` words) in parallel
pub fn run_autoplay<S: Strategy>(
    strategy: &S,
    strategy_name: &'static str,
    words: &[SecretWord],
    limit: Option<usize>,
    show_progress: bool,
) -> AutoplayStatistics {
    let count = limit.unwrap_or(words.len()).min(words.len());
    let test_words = &words[..count];

    info!(strategy = strategy_name, games = count, "autoplay started");

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let records: Vec<GameRecord> = test_words
        .par_iter()
        .map(|secret| {
            let record = play_game(strategy, secret, words);
            pb.inc(1);
            record
        })
        .collect();
    pb.finish_with_message("Complete!");

    let stats = summarize(strategy_name, &records, start.elapsed());
    info!(
        wins = stats.wins,
        losses = stats.losses,
        elapsed_ms = stats.total_time.as_millis(),
        "autoplay finished"
    );
    stats
}

/// Aggregate per-game records into statistics
#[must_use]
pub fn summarize(
    strategy: &'static str,
    records: &[GameRecord],
    total_time: Duration,
) -> AutoplayStatistics {
    let mut incorrect_distribution = [0; MAX_GUESSES as usize];
    let mut total_incorrect = 0usize;
    let mut wins = 0;

    for record in records.iter().filter(|r| r.won) {
        wins += 1;
        total_incorrect += usize::from(record.incorrect);
        incorrect_distribution[usize::from(record.incorrect)] += 1;
    }

    let average_incorrect = if wins > 0 {
        total_incorrect as f64 / wins as f64
    } else {
        0.0
    };

    let mut hardest_words: Vec<(String, u8)> = records
        .iter()
        .filter(|r| r.won && r.incorrect > 0)
        .map(|r| (r.word.clone(), r.incorrect))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(10);

    let mut lost_words: Vec<String> = records
        .iter()
        .filter(|r| !r.won)
        .map(|r| r.word.clone())
        .collect();
    lost_words.sort();

    AutoplayStatistics {
        strategy,
        total_games: records.len(),
        wins,
        losses: records.len() - wins,
        incorrect_distribution,
        average_incorrect,
        hardest_words,
        lost_words,
        total_time,
    }
}
