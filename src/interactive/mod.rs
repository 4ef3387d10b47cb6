//! Interactive TUI
//!
//! Terminal game with an on-screen keyboard that can be typed on or clicked.

mod app;
pub mod layout;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use layout::{ScreenLayout, Target};
pub use rendering::ui;
