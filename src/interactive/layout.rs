//! Screen layout
//!
//! Computed from the terminal area alone so drawing and mouse hit-testing agree on where
//! every key and button is.

use crate::core::{KEYBOARD_ROWS, Letter};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const KEY_WIDTH: u16 = 5;
pub const KEY_HEIGHT: u16 = 3;
pub const KEY_GAP: u16 = 1;
const GALLOWS_WIDTH: u16 = 21;

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Key(Letter),
    PlayAgain,
}

/// Rectangles for every part of the TUI
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub header: Rect,
    pub gallows: Rect,
    pub word: Rect,
    pub messages: Rect,
    pub play_again: Rect,
    pub keyboard: Rect,
    pub keys: Vec<(Letter, Rect)>,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let keyboard_height = KEY_HEIGHT * KEYBOARD_ROWS.len() as u16 + 2;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Header
                Constraint::Min(9),                  // Gallows + word
                Constraint::Length(keyboard_height), // Keyboard
                Constraint::Length(3),               // Status bar
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(rows[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Word + remaining
                Constraint::Min(2),    // Messages
                Constraint::Length(3), // Play again
            ])
            .split(main[1]);

        let play_again = centered(right[2], 16);

        Self {
            header: rows[0],
            gallows: main[0],
            word: right[0],
            messages: right[1],
            play_again,
            keyboard: rows[2],
            keys: key_rects(rows[2]),
            status: rows[3],
        }
    }

    /// What, if anything, is at terminal cell (`column`, `row`)
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        if contains(self.play_again, column, row) {
            return Some(Target::PlayAgain);
        }
        self.keys
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|&(letter, _)| Target::Key(letter))
    }
}

fn key_rects(keyboard: Rect) -> Vec<(Letter, Rect)> {
    let inner = Rect {
        x: keyboard.x.saturating_add(1),
        y: keyboard.y.saturating_add(1),
        width: keyboard.width.saturating_sub(2),
        height: keyboard.height.saturating_sub(2),
    };

    let mut keys = Vec::with_capacity(26);
    for (r, row) in KEYBOARD_ROWS.iter().enumerate() {
        let count = row.len() as u16;
        let row_width = count * KEY_WIDTH + count.saturating_sub(1) * KEY_GAP;
        let x0 = inner.x + inner.width.saturating_sub(row_width) / 2;
        let y = inner.y + r as u16 * KEY_HEIGHT;

        for (i, c) in row.chars().enumerate() {
            let Ok(letter) = Letter::new(c) else {
                continue;
            };
            let rect = Rect::new(
                x0 + i as u16 * (KEY_WIDTH + KEY_GAP),
                y,
                KEY_WIDTH,
                KEY_HEIGHT,
            )
            .intersection(inner);
            if rect.area() > 0 {
                keys.push((letter, rect));
            }
        }
    }
    keys
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

const fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 100, 32))
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn every_letter_has_a_key() {
        let layout = layout();
        assert_eq!(layout.keys.len(), 26);
        let mut letters: Vec<char> = layout.keys.iter().map(|(l, _)| l.as_char()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('A'..='Z').collect::<Vec<_>>());
    }

    #[test]
    fn keys_are_full_size_and_inside_keyboard() {
        let layout = layout();
        for (letter, rect) in &layout.keys {
            assert_eq!(rect.width, KEY_WIDTH, "{letter}");
            assert_eq!(rect.height, KEY_HEIGHT, "{letter}");
            assert_eq!(rect.intersection(layout.keyboard), *rect, "{letter}");
        }
    }

    #[test]
    fn keys_do_not_overlap() {
        let layout = layout();
        for (i, (a, ra)) in layout.keys.iter().enumerate() {
            for (b, rb) in &layout.keys[i + 1..] {
                assert!(!ra.intersects(*rb), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn hit_test_finds_keys() {
        let layout = layout();
        for &(letter, rect) in &layout.keys {
            let (x, y) = center(rect);
            assert_eq!(layout.hit_test(x, y), Some(Target::Key(letter)));
        }
    }

    #[test]
    fn hit_test_finds_play_again() {
        let layout = layout();
        let (x, y) = center(layout.play_again);
        assert_eq!(layout.hit_test(x, y), Some(Target::PlayAgain));
    }

    #[test]
    fn hit_test_misses_empty_space() {
        let layout = layout();
        let (x, y) = center(layout.header);
        assert_eq!(layout.hit_test(x, y), None);
        assert_eq!(layout.hit_test(0, layout.keyboard.y), None);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 10, 5));
        assert!(layout.keys.len() <= 26);
        let _ = layout.hit_test(3, 3);
    }
}
