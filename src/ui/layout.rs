// src/ui/layout.rs
//! Layout computation for the picker panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedLayout {
    /// Icon list column
    pub list: Rect,
    /// Preview column
    pub preview: Rect,
    /// One-line key help at the bottom
    pub help: Rect,
}

/// Split the terminal into list and preview columns above a help line.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    ComputedLayout {
        list: columns[0],
        preview: columns[1],
        help: rows[1],
    }
}
