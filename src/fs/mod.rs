// src/fs/mod.rs
//! Filesystem module - file type detection for icon selection.

pub mod detection;

// Re-export commonly used types
pub use detection::{FileCategory, FileType, detect_file_type};
