//! TUI rendering with ratatui
//!
//! Draws a `GameSnapshot`: gallows, word, on-screen keyboard, messages and status.

use super::app::{App, MessageStyle};
use super::layout::ScreenLayout;
use crate::core::{GameSnapshot, KeyState, Letter, MAX_GUESSES, Outcome};
use crate::output::formatters::{gallows, remaining_label, status_message};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let layout = ScreenLayout::new(f.area());
    let snapshot = app.engine.snapshot();

    render_header(f, layout.header);
    render_gallows(f, &snapshot, layout.gallows);
    render_word(f, &snapshot, layout.word);
    render_messages(f, app, layout.messages);
    render_play_again(f, &snapshot, layout.play_again);
    render_keyboard(f, &snapshot, &layout);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let color = match snapshot.outcome {
        Outcome::Loss => Color::Red,
        Outcome::Win => Color::Green,
        Outcome::InProgress => Color::White,
    };
    let lines: Vec<Line> = gallows(snapshot)
        .iter()
        .map(|&line| Line::from(line))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {}/{MAX_GUESSES} ", snapshot.incorrect_guesses))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

/// Spans for the secret: revealed letters, placeholders, and on a loss the missed letters
fn word_spans(snapshot: &GameSnapshot) -> Vec<Span<'static>> {
    let answer: Vec<char> = snapshot
        .answer
        .as_deref()
        .map(|a| a.chars().collect())
        .unwrap_or_default();

    let mut spans = Vec::with_capacity(snapshot.word_length * 2);
    for (i, slot) in snapshot.revealed.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let span = match slot {
            Some(letter) => {
                let mut style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                if snapshot.outcome == Outcome::Win {
                    style = style.fg(Color::Green);
                } else if snapshot.is_fresh(i) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled(letter.to_string(), style)
            }
            None => match answer.get(i) {
                Some(&c) if snapshot.outcome == Outcome::Loss => Span::styled(
                    c.to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                _ => Span::styled("_", Style::default().fg(Color::DarkGray)),
            },
        };
        spans.push(span);
    }
    spans
}

fn render_word(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let status_style = match snapshot.outcome {
        Outcome::InProgress => Style::default().fg(Color::White),
        Outcome::Win => Style::default().fg(Color::Black).bg(Color::Green),
        Outcome::Loss => Style::default().fg(Color::White).bg(Color::Red),
    };

    let content = vec![
        Line::from(word_spans(snapshot)),
        Line::from(""),
        Line::from(remaining_label(snapshot.remaining_guesses)),
        Line::from(Span::styled(
            status_message(snapshot.outcome),
            status_style.add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Word ({} letters) ", snapshot.word_length))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_play_again(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let color = if snapshot.outcome.is_resolved() {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let button = Paragraph::new("Play again")
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(button, area);
}

fn key_style(snapshot: &GameSnapshot, letter: Letter) -> Style {
    let style = match snapshot.key_state(letter) {
        KeyState::Unused => Style::default().fg(Color::Black).bg(Color::White),
        KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyState::Incorrect => Style::default().fg(Color::White).bg(Color::Red),
    };
    if snapshot.last_guess == Some(letter) {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

fn render_keyboard(f: &mut Frame, snapshot: &GameSnapshot, layout: &ScreenLayout) {
    f.render_widget(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
        layout.keyboard,
    );

    for &(letter, rect) in &layout.keys {
        let style = key_style(snapshot, letter);
        let key = Paragraph::new(letter.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style));
        f.render_widget(key, rect);
    }
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let stats = &app.stats;
    let text = Line::from(vec![
        Span::raw(format!(
            "Games: {} | Won: {} | Win Rate: {:.0}% | Streak: {} (best {})",
            stats.total_games,
            stats.games_won,
            stats.win_rate(),
            stats.current_streak,
            stats.best_streak
        )),
        Span::styled(
            "   Letters: guess | Shift+Enter: new game | Esc: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::engine::GameEngine;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app_after(guesses: &str) -> App {
        let words = vec![SecretWord::new("computer").unwrap()];
        let mut app = App::new(GameEngine::new(words, StdRng::seed_from_u64(0)).unwrap());
        for c in guesses.chars() {
            app.guess(Letter::new(c).unwrap());
        }
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn word_text(snapshot: &GameSnapshot) -> String {
        word_spans(snapshot)
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn draws_pattern_and_status() {
        let screen = draw(&app_after("oz"));
        assert!(screen.contains("HANGMAN"));
        assert!(screen.contains("_ O _ _ _ _ _ _"));
        assert!(screen.contains("6 guesses remaining"));
        assert!(screen.contains("Guess a letter:"));
        assert!(screen.contains("Play again"));
    }

    #[test]
    fn draws_win_message() {
        let screen = draw(&app_after("computer"));
        assert!(screen.contains("You win!"));
        assert!(screen.contains("C O M P U T E R"));
    }

    #[test]
    fn loss_reveals_missed_letters() {
        let app = app_after("oabdfghi");
        let snapshot = app.engine.snapshot();
        assert_eq!(word_text(&snapshot), "C O M P U T E R");

        let spans = word_spans(&snapshot);
        assert_eq!(spans[0].style.fg, Some(Color::Red));
        assert_eq!(spans[2].style.fg, Some(Color::Yellow));
        assert!(draw(&app).contains("Game Over!"));
    }

    #[test]
    fn in_progress_hides_unrevealed_letters() {
        let snapshot = app_after("e").engine.snapshot();
        assert_eq!(word_text(&snapshot), "_ _ _ _ _ _ E _");
    }

    #[test]
    fn key_styles_follow_guesses() {
        let snapshot = app_after("cz").engine.snapshot();
        let letter = |c| Letter::new(c).unwrap();
        assert_eq!(key_style(&snapshot, letter('C')).bg, Some(Color::Green));
        assert_eq!(key_style(&snapshot, letter('Z')).bg, Some(Color::Red));
        assert_eq!(key_style(&snapshot, letter('Q')).bg, Some(Color::White));
        assert!(
            key_style(&snapshot, letter('Z'))
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }
}
