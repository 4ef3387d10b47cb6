//! Terminal output formatting
//!
//! Display utilities for line mode, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_autoplay_statistics, print_word_list_summary, write_board};
