// src/config/error.rs
//! Error types for configuration loading.

use std::path::PathBuf;

use crate::error::UnknownIconId;

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading an icon theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML or unexpected keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A slot names an icon that is not in the registry.
    #[error("icon slot '{slot}': {source}")]
    UnknownIcon {
        slot: &'static str,
        #[source]
        source: UnknownIconId,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The registry error behind this failure, if any.
    pub fn unknown_icon(&self) -> Option<&UnknownIconId> {
        match self {
            Self::UnknownIcon { source, .. } => Some(source),
            _ => None,
        }
    }
}
