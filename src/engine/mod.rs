//! Game engine
//!
//! Wraps the pure game state with injected word selection and logging.

mod game_engine;

pub use game_engine::{EngineError, GameEngine};
