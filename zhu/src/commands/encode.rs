//! `zhu encode` - convert JSON lines back into a zsh history file.

use anyhow::{Context as _, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::warn;
use zhu_history::{HistoryEntry, codec};

pub fn run(decoded_file: &Path) -> Result<()> {
    let file = super::open_input(decoded_file)?;
    let reader = BufReader::new(file);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read {}", decoded_file.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        // malformed lines are reported and skipped; a negative duration
        // below aborts the whole run
        let entry: HistoryEntry = match serde_json::from_str(&line) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("failed to parse {line:?}: {err}");
                continue;
            }
        };

        let bytes = codec::encode(&entry)
            .with_context(|| format!("Failed to encode entry at {}", entry.start_time))?;
        out.write_all(&bytes)?;
    }

    Ok(())
}
