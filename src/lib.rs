//! Hangman
//!
//! A terminal hangman game: guess the secret word one letter at a time before seven
//! incorrect guesses complete the gallows.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Letter, Outcome};
//! use hangman::engine::GameEngine;
//! use hangman::wordlists::{COMMON_WORDS, loader::words_from_slice, qualifying_words};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let words = qualifying_words(words_from_slice(COMMON_WORDS), 8);
//! let mut engine = GameEngine::new(words, StdRng::seed_from_u64(7)).unwrap();
//!
//! engine.guess_letter(Letter::new('e').unwrap());
//! println!("{}", engine.game().pattern());
//! assert_eq!(engine.status(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Word selection and the game in progress
pub mod engine;

// Automated guessing strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
