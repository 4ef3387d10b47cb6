//! Hangman - CLI
//!
//! Terminal hangman with a TUI (default), a line mode, and an autoplay evaluator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_autoplay, run_simple, summarize_words},
    core::{MIN_WORD_LENGTH, SecretWord},
    engine::GameEngine,
    logging::{self, LogTarget},
    output::{print_autoplay_statistics, print_word_list_summary},
    solver::StrategyType,
    wordlists::{COMMON_WORDS, loader::words_from_slice, qualifying_words},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'common' (default, embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "common")]
    wordlist: String,

    /// Minimum length of a secret word
    #[arg(long, global = true, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,

    /// Seed for word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - on-screen keyboard, mouse support)
    Play,

    /// Simple line mode (type letters, no TUI)
    Simple,

    /// Let a strategy play every qualifying word and report statistics
    Autoplay {
        /// Strategy: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show how many words qualify as secrets
    Words {
        /// Number of sample words to print
        #[arg(short = 'n', long, default_value = "10")]
        sample: usize,
    },
}

/// Load the word list selected by the -w flag
///
/// - "common": the embedded common word list
/// - "<path>": one word per line from a file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<SecretWord>> {
    use hangman::wordlists::loader::load_from_file;

    match wordlist_mode {
        "common" => Ok(words_from_slice(COMMON_WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let owns_terminal = matches!(command, Commands::Play);
    logging::init(&LogTarget::select(cli.log_file, owns_terminal))?;

    let all_words = load_wordlist(&cli.wordlist)?;
    let total = all_words.len();
    let words = qualifying_words(all_words, cli.min_length);

    match command {
        Commands::Play => {
            let engine = build_engine(words, cli.seed, cli.min_length)?;
            run_play_command(engine)
        }
        Commands::Simple => {
            let mut engine = build_engine(words, cli.seed, cli.min_length)?;
            let summary = run_simple(&mut engine)?;
            info!(wins = summary.wins, losses = summary.losses, "session ended");
            Ok(())
        }
        Commands::Autoplay { strategy, limit } => {
            run_autoplay_command(&strategy, limit, &words);
            Ok(())
        }
        Commands::Words { sample } => {
            let summary = summarize_words(total, &words, cli.min_length, sample);
            print_word_list_summary(&summary);
            Ok(())
        }
    }
}

fn build_engine(
    words: Vec<SecretWord>,
    seed: Option<u64>,
    min_length: usize,
) -> Result<GameEngine> {
    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    GameEngine::new(words, rng)
        .with_context(|| format!("No words of at least {min_length} letters in the word list"))
}

fn run_autoplay_command(strategy_name: &str, limit: Option<usize>, words: &[SecretWord]) {
    let strategy = StrategyType::from_name(strategy_name);

    println!("\n{}", "═".repeat(60));
    println!(" Hangman Autoplay ");
    println!("{}", "═".repeat(60));
    println!("\nPlaying {} words", limit.unwrap_or(words.len()).min(words.len()));
    println!("Strategy: {}\n", strategy.name());

    let stats = run_autoplay(&strategy, strategy.name(), words, limit, true);
    print_autoplay_statistics(&stats);
}

fn run_play_command(engine: GameEngine) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
