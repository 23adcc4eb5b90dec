// src/icons/handle.rs
//! Opaque glyph handle handed out by the registry.

use std::fmt;

use ratatui::{style::Style, text::Span};

/// A renderable icon glyph.
///
/// Instances live as statics in the glyph library ([`super::nerd`]); callers
/// only ever hold `&'static Icon` references to them.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Icon {
    glyph: &'static str,
}

impl Icon {
    pub const fn new(glyph: &'static str) -> Self {
        Self { glyph }
    }

    /// The glyph text, usually a single private-use codepoint.
    pub const fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Codepoint of the first character of the glyph.
    pub fn codepoint(&self) -> u32 {
        self.glyph.chars().next().map_or(0, u32::from)
    }

    /// Render the glyph as a styled span.
    pub fn span(&self, style: Style) -> Span<'static> {
        Span::styled(self.glyph, style)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph)
    }
}
