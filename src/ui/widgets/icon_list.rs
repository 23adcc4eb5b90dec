// src/ui/widgets/icon_list.rs
//! Icon list widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::icons::{ICONS, IconId};

/// Render the registry keys as a selectable list.
pub fn render_icon_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    keys: &[IconId],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = keys
        .iter()
        .map(|&id| ListItem::new(format!("{} {}", ICONS.get(id), id)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
