// src/lib.rs
//! iconmap - icons referenced by stable string identifiers.
//!
//! [`icons::ICONS`] maps every [`icons::IconId`] to a glyph. Typed lookups are
//! total; names arriving as plain strings go through
//! [`IconRegistry::lookup`](icons::IconRegistry::lookup) and fail with
//! [`UnknownIconId`] when they name nothing.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod icons;
pub mod logging;
pub mod ui;

pub use error::UnknownIconId;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
