//! `zhu decode` - convert a zsh history file into JSON lines.

use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};
use zhu_history::{RecordReader, codec};

pub fn run(history_file: Option<PathBuf>, pretty: bool) -> Result<()> {
    let path = match history_file {
        Some(path) => path,
        None => super::default_history_path()?,
    };
    debug!("decoding history from {}", path.display());

    let file = super::open_input(&path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for record in RecordReader::new(file) {
        let record = record.with_context(|| format!("Failed to read {}", path.display()))?;

        let entry = match codec::decode(&record) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    "failed to parse {:?}: {err}",
                    String::from_utf8_lossy(&record)
                );
                continue;
            }
        };

        let json = if pretty {
            serde_json::to_string_pretty(&entry)?
        } else {
            serde_json::to_string(&entry)?
        };
        writeln!(out, "{json}")?;
    }

    Ok(())
}
