// src/app/mod.rs
//! Application module - picker state and input handling.

pub mod state;

// Re-export the App struct
pub use state::{App, Outcome};
