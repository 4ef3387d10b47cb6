//! TUI application state and logic

use super::layout::{ScreenLayout, Target};
use crate::core::{GuessResult, Letter, Outcome};
use crate::engine::GameEngine;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{debug, warn};

/// Application state
pub struct App<R: Rng = StdRng> {
    pub engine: GameEngine<R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Outcome::Loss => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        let mut app = Self {
            engine,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Type or click letters to guess the word.",
            MessageStyle::Info,
        );
        app
    }

    /// Guess a letter and describe the result in the message log
    pub fn guess(&mut self, letter: Letter) {
        match self.engine.guess_letter(letter) {
            GuessResult::Hit { revealed: 1 } => {
                self.add_message(
                    &format!("Good guess! '{letter}' is in the word."),
                    MessageStyle::Success,
                );
            }
            GuessResult::Hit { revealed } => {
                self.add_message(
                    &format!("Good guess! '{letter}' appears {revealed} times."),
                    MessageStyle::Success,
                );
            }
            GuessResult::Miss => {
                self.add_message(
                    &format!("Sorry, '{letter}' is not in the word."),
                    MessageStyle::Error,
                );
            }
            GuessResult::AlreadyGuessed => {
                self.add_message(
                    &format!("'{letter}' was already guessed."),
                    MessageStyle::Info,
                );
                return;
            }
            GuessResult::GameOver => return,
        }

        let outcome = self.engine.status();
        if outcome.is_resolved() {
            self.stats.record(outcome);
            let secret = self.engine.game().secret().text().to_string();
            match outcome {
                Outcome::Win => self.add_message(
                    &format!("🎉 You win! The word was {secret}."),
                    MessageStyle::Success,
                ),
                _ => self.add_message(
                    &format!("💀 Game over! The word was {secret}."),
                    MessageStyle::Error,
                ),
            }
            self.add_message("Shift+Enter or 'Play again' for a new game.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        self.engine.init();
        self.messages.clear();
        self.add_message("New game started! Guess a letter.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.new_game();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Ok(letter) = Letter::new(c) {
                    self.guess(letter);
                }
            }
            _ => {}
        }
    }

    /// Apply a mouse event; `area` is the full terminal area the UI was drawn into
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match ScreenLayout::new(area).hit_test(mouse.column, mouse.row) {
            Some(Target::Key(letter)) => self.guess(letter),
            Some(Target::PlayAgain) => self.new_game(),
            None => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Shift+Enter is only distinguishable from Enter with the enhanced keyboard protocol
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    } else {
        debug!("keyboard enhancement unsupported; Shift+Enter may arrive as Enter");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        warn!(%err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crossterm::event::KeyEventState;
    use rand::SeedableRng;

    fn app() -> App {
        let words = vec![SecretWord::new("computer").unwrap()];
        App::new(GameEngine::new(words, StdRng::seed_from_u64(0)).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 32,
    };

    #[test]
    fn typed_letters_are_guessed() {
        let mut app = app();
        type_str(&mut app, "oz");
        assert_eq!(app.engine.game().pattern(), "_O______");
        assert_eq!(app.engine.game().incorrect_guesses(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn uppercase_and_lowercase_are_same_letter() {
        let mut app = app();
        type_str(&mut app, "oO");
        assert_eq!(app.engine.game().guessed().len(), 1);
        assert!(app.messages.last().unwrap().text.contains("already guessed"));
    }

    #[test]
    fn non_letter_keys_ignored() {
        let mut app = app();
        type_str(&mut app, "1 ?");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Backspace));
        assert!(app.engine.game().guessed().is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Char('o'));
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        app.handle_key(release);
        assert!(app.engine.game().guessed().is_empty());
    }

    #[test]
    fn control_chords_do_not_guess() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::ALT));
        assert!(app.engine.game().guessed().is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.engine.game().guessed().is_empty());
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn win_records_stats() {
        let mut app = app();
        type_str(&mut app, "computer");
        assert_eq!(app.engine.status(), Outcome::Win);
        assert_eq!(
            app.stats,
            Statistics {
                total_games: 1,
                games_won: 1,
                current_streak: 1,
                best_streak: 1,
            }
        );
        assert!(app.messages.iter().any(|m| m.text.contains("You win!")));
    }

    #[test]
    fn input_after_loss_is_ignored() {
        let mut app = app();
        type_str(&mut app, "abdfghi");
        assert_eq!(app.engine.status(), Outcome::Loss);
        let messages = app.messages.len();

        type_str(&mut app, "cz");
        assert_eq!(app.engine.game().guessed().len(), 7);
        assert_eq!(app.messages.len(), messages);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn shift_enter_restarts() {
        let mut app = app();
        type_str(&mut app, "abdfghi");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        assert_eq!(app.engine.status(), Outcome::InProgress);
        assert!(app.engine.game().guessed().is_empty());
        assert_eq!(app.engine.games_started(), 2);
    }

    #[test]
    fn plain_enter_does_not_restart() {
        let mut app = app();
        type_str(&mut app, "z");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine.games_started(), 1);
        assert_eq!(app.engine.game().guessed().len(), 1);
    }

    #[test]
    fn streaks_track_consecutive_wins() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Win);
        stats.record(Outcome::Win);
        stats.record(Outcome::Loss);
        stats.record(Outcome::Win);
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn clicking_a_key_guesses_it() {
        let mut app = app();
        let layout = ScreenLayout::new(AREA);
        let (_, rect) = layout
            .keys
            .iter()
            .find(|(l, _)| l.as_char() == 'O')
            .copied()
            .unwrap();

        app.handle_mouse(
            click(MouseEventKind::Down(MouseButton::Left), rect.x + 1, rect.y + 1),
            AREA,
        );
        assert_eq!(app.engine.game().pattern(), "_O______");
    }

    #[test]
    fn clicking_play_again_restarts() {
        let mut app = app();
        type_str(&mut app, "z");
        let button = ScreenLayout::new(AREA).play_again;

        app.handle_mouse(
            click(MouseEventKind::Down(MouseButton::Left), button.x + 1, button.y + 1),
            AREA,
        );
        assert_eq!(app.engine.games_started(), 2);
        assert!(app.engine.game().guessed().is_empty());
    }

    #[test]
    fn other_mouse_events_ignored() {
        let mut app = app();
        let layout = ScreenLayout::new(AREA);
        let (_, rect) = layout.keys[0];

        app.handle_mouse(click(MouseEventKind::Moved, rect.x + 1, rect.y + 1), AREA);
        app.handle_mouse(
            click(MouseEventKind::Down(MouseButton::Right), rect.x + 1, rect.y + 1),
            AREA,
        );
        assert!(app.engine.game().guessed().is_empty());
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
