//! Automated guessing
//!
//! Strategies that play hangman against a known word list, used by the autoplay command.

pub mod candidates;
pub mod frequency;
pub mod strategy;

pub use frequency::FrequencyStrategy;
pub use strategy::{RandomStrategy, Strategy, StrategyType};
