// src/cli.rs
//! Command-line interface definitions and handlers.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::{
    config::{Config, IconTheme},
    fs::detect_file_type,
    icons::ICONS,
    ui::{
        self,
        icons::{EntryKind, icon_for_entry},
    },
};

/// Browse and validate the application's icon set.
#[derive(Debug, Parser)]
#[command(name = "iconmap", version, about)]
pub struct Cli {
    /// Config file (defaults to <config dir>/iconmap/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick an icon interactively and print its identifier
    Pick,
    /// Print every identifier with its codepoint and glyph
    List,
    /// Validate a config file and print the resolved theme
    Check {
        /// Config file to validate
        file: PathBuf,
    },
    /// Print the themed icon for each path
    Which {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command.unwrap_or(Command::Pick) {
            Command::Pick => {
                let config = Config::load_or_default(self.config.as_deref())?;
                if let Some(id) = ui::run(config.icons)? {
                    writeln!(out, "{id}")?;
                }
            }
            Command::List => write_list(&mut out)?,
            Command::Check { file } => {
                let config = Config::load(&file)
                    .with_context(|| format!("{} is not a valid config", file.display()))?;
                write_theme(&mut out, &config.icons)?;
            }
            Command::Which { paths } => {
                let config = Config::load_or_default(self.config.as_deref())?;
                for path in &paths {
                    write_which(&mut out, path, &config.icons)?;
                }
            }
        }
        Ok(())
    }
}

/// `name<TAB>U+XXXX<TAB>glyph` per registry key, in declaration order.
pub fn write_list(out: &mut impl Write) -> io::Result<()> {
    for (id, icon) in ICONS.iter() {
        writeln!(out, "{id}\tU+{:04X}\t{icon}", icon.codepoint())?;
    }
    Ok(())
}

pub fn write_theme(out: &mut impl Write, theme: &IconTheme) -> io::Result<()> {
    for (slot, id) in theme.slots() {
        writeln!(out, "{slot}\t{id}\t{}", ICONS.get(id))?;
    }
    Ok(())
}

fn write_which(out: &mut impl Write, path: &Path, theme: &IconTheme) -> Result<()> {
    if path.is_dir() {
        let icon = icon_for_entry(EntryKind::Directory, theme);
        writeln!(out, "{icon} {}\tDirectory", path.display())?;
        return Ok(());
    }

    match detect_file_type(path) {
        Ok(kind) => {
            let icon = icon_for_entry(EntryKind::File(kind.category), theme);
            writeln!(out, "{icon} {}\t{}\t{}", path.display(), kind.category, kind.mime)?;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot classify");
            writeln!(out, "{} {}\tunreadable", theme.placeholder(), path.display())?;
        }
    }
    Ok(())
}
