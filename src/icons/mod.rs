// src/icons/mod.rs
//! Icon registry - maps stable string identifiers to glyphs.

pub mod builtin;
pub mod handle;
pub mod nerd;
pub mod registry;

// Re-export commonly used types
pub use builtin::{ICONS, IconId};
pub use handle::Icon;
pub use registry::{IconKey, IconRegistry};
