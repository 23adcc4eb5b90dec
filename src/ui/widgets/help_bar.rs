// src/ui/widgets/help_bar.rs
//! Key help line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const BINDINGS: &[(&str, &str)] = &[
    ("↑/↓", "move"),
    ("Home/End", "jump"),
    ("Enter", "select"),
    ("q", "quit"),
];

pub fn render_help_bar(f: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::with_capacity(BINDINGS.len() * 2);
    for (key, action) in BINDINGS {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!("{action} ")));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
