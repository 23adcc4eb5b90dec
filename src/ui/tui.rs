// src/ui/tui.rs
//! Terminal setup and the picker event loop.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::{
    app::{App, Outcome},
    config::IconTheme,
    icons::IconId,
};

/// Run the picker until the user selects an icon or quits.
pub fn run(theme: IconTheme) -> Result<Option<IconId>> {
    enable_raw_mode()?;
    let _restore = Teardown(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    event_loop(&mut terminal, App::new(theme))
}

/// Calls its closure when dropped, including on early `?` returns.
struct Teardown<F: FnMut()>(F);

impl<F: FnMut()> Drop for Teardown<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<Option<IconId>> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        let CEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.on_key(key) {
            Outcome::Continue => {}
            Outcome::Selected(id) => {
                tracing::info!(%id, "icon selected");
                return Ok(Some(id));
            }
            Outcome::Cancelled => return Ok(None),
        }
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(error = %e, "failed to leave alternate screen");
    }
}
