// src/app/state.rs
//! Picker state management.

use crossterm::event::KeyEvent;
use ratatui::{Frame, widgets::ListState};

use crate::{
    config::IconTheme,
    icons::{ICONS, IconId},
    ui::{
        keybindings::{NavigationAction, key_to_action},
        layout::compute_layout,
        widgets::{render_help_bar, render_icon_list, render_preview},
    },
};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Selected(IconId),
    Cancelled,
}

/// Main picker state.
pub struct App {
    /// Theme used for the preview panel
    pub theme: IconTheme,
    /// Registry keys in declaration order
    pub keys: &'static [IconId],
    /// List widget state
    pub state: ListState,
    /// Currently highlighted index
    pub selected: usize,
}

impl App {
    pub fn new(theme: IconTheme) -> Self {
        let keys = ICONS.keys();
        let mut state = ListState::default();
        state.select((!keys.is_empty()).then_some(0));

        Self {
            theme,
            keys,
            state,
            selected: 0,
        }
    }

    /// The highlighted identifier.
    pub fn selected_id(&self) -> Option<IconId> {
        self.keys.get(self.selected).copied()
    }

    /// Handle a key event.
    pub fn on_key(&mut self, key: KeyEvent) -> Outcome {
        match key_to_action(&key) {
            NavigationAction::Down => {
                if self.selected + 1 < self.keys.len() {
                    self.selected += 1;
                }
            }
            NavigationAction::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            NavigationAction::Top => self.selected = 0,
            NavigationAction::Bottom => self.selected = self.keys.len().saturating_sub(1),
            NavigationAction::Select => {
                if let Some(id) = self.selected_id() {
                    return Outcome::Selected(id);
                }
            }
            NavigationAction::Quit => return Outcome::Cancelled,
            NavigationAction::None => {}
        }
        self.state.select(Some(self.selected));
        Outcome::Continue
    }

    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());
        let title = format!("Icons ({})", self.keys.len());

        render_icon_list(f, layout.list, &title, self.keys, &mut self.state);
        render_preview(f, layout.preview, self.selected_id(), &self.theme);
        render_help_bar(f, layout.help);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn press(app: &mut App, code: KeyCode) -> Outcome {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn starts_on_first_key() {
        let app = App::new(IconTheme::default());
        assert_eq!(app.selected_id(), Some(IconId::Play));
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn navigation_is_clamped() {
        let mut app = App::new(IconTheme::default());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::End);
        assert_eq!(app.selected_id(), ICONS.keys().last().copied());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, ICONS.len() - 1);

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_id(), Some(IconId::Pause));
        assert_eq!(app.state.selected(), Some(1));
    }

    #[test]
    fn enter_selects_and_escape_cancels() {
        let mut app = App::new(IconTheme::default());
        press(&mut app, KeyCode::Down);
        assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Selected(IconId::Pause));
        assert_eq!(press(&mut app, KeyCode::Esc), Outcome::Cancelled);
        assert_eq!(press(&mut app, KeyCode::Char('x')), Outcome::Continue);
    }

    #[test]
    fn draw_shows_names_and_preview() {
        let mut app = App::new(IconTheme::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Icons (22)"));
        assert!(screen.contains("Pause"));
        assert!(screen.contains("Name: Play"));
        assert!(screen.contains("U+F04B"));
        assert!(screen.contains("Used by: play"));
    }
}
