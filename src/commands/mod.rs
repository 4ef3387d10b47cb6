//! Command implementations

pub mod autoplay;
pub mod simple;
pub mod words;

pub use autoplay::{AutoplayStatistics, GameRecord, play_game, run_autoplay};
pub use simple::{SessionSummary, run_session, run_simple};
pub use words::{WordListSummary, summarize_words};
