// src/config/mod.rs
//! Configuration module - icon theme loaded from TOML.
//!
//! ```toml
//! [icons]
//! folder = "FolderOpen"
//! play = "Music"
//! ```
//!
//! Every value must be an [`IconId`](crate::icons::IconId) name. Slots left
//! out keep their defaults.

pub mod error;
pub mod theme;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use error::{Error, Result};
pub use theme::IconTheme;

use theme::RawIconTheme;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub icons: IconTheme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    icons: RawIconTheme,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(source)?;
        Ok(Self {
            icons: raw.icons.resolve()?,
        })
    }

    /// Load a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "loaded icon config");
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else
    /// built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("no config file, using default icon theme");
                Ok(Self::default())
            }
        }
    }
}

/// `<config_dir>/iconmap/config.toml`, when the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("iconmap").join("config.toml"))
}
