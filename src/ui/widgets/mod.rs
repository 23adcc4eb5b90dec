// src/ui/widgets/mod.rs
//! Custom widgets for the picker UI.

pub mod help_bar;
pub mod icon_list;
pub mod preview;

// Re-export widget rendering functions
pub use help_bar::render_help_bar;
pub use icon_list::render_icon_list;
pub use preview::render_preview;
