//! Subcommand implementations.
//!
//! Each subcommand is a thin adapter: it opens the files named on the command
//! line and feeds them to the codec in `zhu-history`, which itself never
//! touches the filesystem.

use anyhow::{Context as _, Result};
use std::fs::File;
use std::path::{Path, PathBuf};

pub mod decode;
pub mod encode;
pub mod merge;

/// Default history file location (`~/.zsh_history`).
fn default_history_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Failed to get home directory")?;
    Ok(home_dir.join(".zsh_history"))
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open {}", path.display()))
}
