//! Key mapping for the game screen.
//!
//! Translates device events into the two logical game events (`start`,
//! `jump`) plus quit; the state machine decides what a press means in the
//! current phase.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A key press, reduced to what the game loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Space/Up: jump while Running, start otherwise.
    Primary,
    /// Enter: explicit start request.
    Start,
    /// Esc or q.
    Quit,
}

/// Map a key event to an action, if it means anything to the game screen.
pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(InputAction::Primary),
        KeyCode::Enter => Some(InputAction::Start),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
        _ => None,
    }
}
