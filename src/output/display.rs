//! Display functions for command results

use super::formatters::{
    create_progress_bar, gallows, remaining_label, spaced_pattern, status_message,
};
use crate::commands::{AutoplayStatistics, WordListSummary};
use crate::core::{GameSnapshot, KEYBOARD_ROWS, KeyState, Letter, Outcome};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Write the board for line mode: gallows, pattern, remaining guesses, keyboard, status
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(out: &mut W, snapshot: &GameSnapshot) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows(snapshot) {
        writeln!(out, "    {line}")?;
    }
    writeln!(out)?;

    let pattern = spaced_pattern(snapshot);
    writeln!(out, "    {}", pattern.bright_yellow().bold())?;
    if snapshot.outcome == Outcome::Loss
        && let Some(answer) = &snapshot.answer
    {
        writeln!(out, "    The word was {}", answer.red().bold())?;
    }
    writeln!(out)?;
    writeln!(out, "    {}", remaining_label(snapshot.remaining_guesses))?;

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        write!(out, "    {}", " ".repeat(i))?;
        for c in row.chars() {
            let Ok(letter) = Letter::new(c) else {
                continue;
            };
            write!(out, "{} ", key_label(snapshot, letter))?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", status_line(snapshot.outcome))?;
    Ok(())
}

fn key_label(snapshot: &GameSnapshot, letter: Letter) -> ColoredString {
    let text = letter.to_string();
    let label = match snapshot.key_state(letter) {
        KeyState::Unused => text.normal(),
        KeyState::Correct => text.black().on_green(),
        KeyState::Incorrect => text.white().on_red(),
    };
    if snapshot.last_guess == Some(letter) {
        label.bold().underline()
    } else {
        label
    }
}

fn status_line(outcome: Outcome) -> ColoredString {
    let message = status_message(outcome);
    match outcome {
        Outcome::InProgress => message.bright_white(),
        Outcome::Win => message.green().bold(),
        Outcome::Loss => message.red().bold(),
    }
}

/// Print the result of an autoplay run
pub fn print_autoplay_statistics(stats: &AutoplayStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "AUTOPLAY RESULTS:".bright_cyan().bold(),
        stats.strategy.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nGames:          {}", stats.total_games);
    println!("Won:            {}", stats.wins.to_string().green().bold());
    println!("Lost:           {}", stats.losses.to_string().red().bold());
    println!("Win rate:       {:.1}%", stats.win_rate());
    println!(
        "Avg incorrect:  {:.2} (wins only)",
        stats.average_incorrect
    );
    println!("Time:           {:.2?}", stats.total_time);

    println!("\n{}", "Incorrect guesses per win:".bright_cyan());
    let max_count = stats
        .incorrect_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    for (incorrect, &count) in stats.incorrect_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("  {incorrect}: {} {count}", bar.cyan());
    }

    if !stats.hardest_words.is_empty() {
        println!("\n{}", "Hardest wins:".bright_cyan());
        for (word, incorrect) in &stats.hardest_words {
            println!("  {word:<12} {incorrect} incorrect");
        }
    }

    if !stats.lost_words.is_empty() {
        println!("\n{}", "Lost words:".red());
        for word in stats.lost_words.iter().take(20) {
            println!("  {word}");
        }
        if stats.lost_words.len() > 20 {
            println!("  ... and {} more", stats.lost_words.len() - 20);
        }
    }
    println!();
}

/// Print the word list summary
pub fn print_word_list_summary(summary: &WordListSummary) {
    println!(
        "{} {} of {} words qualify (minimum length {})",
        "Word list:".bright_cyan().bold(),
        summary.qualifying.to_string().bright_yellow(),
        summary.total,
        summary.min_length
    );
    println!("Longest: {}", summary.longest);
    for (len, count) in &summary.by_length {
        println!("  {len:>2} letters: {count}");
    }
    if !summary.sample.is_empty() {
        println!("Sample: {}", summary.sample.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, SecretWord};

    fn board_after(secret: &str, guesses: &str) -> String {
        let mut game = Game::new(SecretWord::new(secret).unwrap());
        for c in guesses.chars() {
            game.guess(Letter::new(c).unwrap());
        }
        let mut out = Vec::new();
        write_board(&mut out, &GameSnapshot::of(&game)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_pattern_and_remaining() {
        let board = board_after("computer", "OZ");
        assert!(board.contains("_ O _ _ _ _ _ _"));
        assert!(board.contains("6 guesses remaining"));
        assert!(board.contains("Guess a letter:"));
    }

    #[test]
    fn board_reveals_answer_on_loss() {
        let board = board_after("computer", "ABDFGHI");
        assert!(board.contains("Game Over!"));
        assert!(board.contains("COMPUTER"));
        assert!(board.contains("0 guesses remaining"));
    }

    #[test]
    fn board_announces_win() {
        let board = board_after("computer", "COMPUTER");
        assert!(board.contains("You win!"));
        assert!(board.contains("C O M P U T E R"));
    }

    #[test]
    fn board_lists_every_key() {
        let board = board_after("computer", "");
        for letter in Letter::all() {
            assert!(board.contains(letter.as_char()), "{letter}");
        }
    }
}
