// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Picker actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Up,
    Down,
    Top,
    Bottom,
    Select,
    Quit,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return NavigationAction::Quit;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Home | KeyCode::Char('g') => NavigationAction::Top,
        KeyCode::End | KeyCode::Char('G') => NavigationAction::Bottom,
        KeyCode::Enter => NavigationAction::Select,
        KeyCode::Esc | KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}
