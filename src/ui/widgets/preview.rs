// src/ui/widgets/preview.rs
//! Preview panel for the highlighted icon.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    config::IconTheme,
    icons::{ICONS, IconId},
};

/// Render details of `selected` plus the themed transport controls.
pub fn render_preview(f: &mut Frame<'_>, area: Rect, selected: Option<IconId>, theme: &IconTheme) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Preview"), area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let details = match selected {
        Some(id) => {
            let icon = ICONS.get(id);
            let used_by = theme.slots_using(id);
            let used_by = if used_by.is_empty() {
                "-".to_string()
            } else {
                used_by.join(", ")
            };
            vec![
                Line::from(icon.span(Style::default().add_modifier(Modifier::BOLD))),
                Line::from(""),
                Line::from(format!("Name: {id}")),
                Line::from(format!("Codepoint: U+{:04X}", icon.codepoint())),
                Line::from(format!("Used by: {used_by}")),
            ]
        }
        None => vec![Line::from("No icon selected")],
    };
    f.render_widget(Paragraph::new(details).wrap(Wrap { trim: true }), inner[0]);

    let controls = Line::from(vec![
        ICONS.get(theme.previous).span(Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        ICONS.get(theme.stop).span(Style::default().fg(Color::Red)),
        Span::raw("  "),
        ICONS.get(theme.play).span(Style::default().fg(Color::Green)),
        Span::raw("  "),
        ICONS.get(theme.pause).span(Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        ICONS.get(theme.next).span(Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(controls).alignment(Alignment::Center), inner[1]);
}
