// src/ui/icons.rs
//! Icon selection for file browser entries.

use crate::{
    config::IconTheme,
    fs::FileCategory,
    icons::{ICONS, Icon},
};

/// A browser entry as far as icon choice is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File(FileCategory),
}

/// Get the themed icon for a file or directory entry.
pub fn icon_for_entry(kind: EntryKind, theme: &IconTheme) -> &'static Icon {
    match kind {
        EntryKind::Directory => ICONS.get(theme.folder),
        EntryKind::File(category) => theme.category_icon(category),
    }
}
