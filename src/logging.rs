//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so it only logs to a file. Text modes may log to stderr.

use anyhow::Result;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, fmt::time, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Pick a target: a log file always wins, otherwise stderr unless the terminal is taken
    #[must_use]
    pub fn select(log_file: Option<PathBuf>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Off,
            None => Self::Stderr,
        }
    }

    /// Filter used when `RUST_LOG` is unset
    #[must_use]
    pub const fn default_filter(&self) -> &'static str {
        match self {
            Self::File(_) => "hangman=info",
            Self::Stderr | Self::Off => "hangman=warn",
        }
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default filter. Call once, early in `main`.
///
/// # Errors
///
/// Returns an error if the log file can't be opened, the filter doesn't parse, or a
/// subscriber is already installed.
pub fn init(target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(target.default_filter()))?;

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_timer(time::uptime()),
                )
                .try_init()?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .with_timer(time::uptime()),
                )
                .try_init()?;
        }
    }
    Ok(())
}
