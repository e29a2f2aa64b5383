//! Key mapping from terminal events to puzzle actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::PuzzleAction;

/// Map keyboard input to puzzle actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PuzzleAction> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Char('H') => Some(PuzzleAction::Hint),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PuzzleAction::Reset),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
            Some(PuzzleAction::NextPuzzle)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
