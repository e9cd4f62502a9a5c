//! `zhu merge` - merge history files into one chronologically ordered file.

use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use zhu_history::{HistoryMerger, codec};

pub fn run(history_files: &[PathBuf]) -> Result<()> {
    let mut merger = HistoryMerger::new();

    for path in history_files {
        let file = super::open_input(path)?;
        let stats = merger
            .add_source(file)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!(
            "merged {} entries from {} ({} skipped)",
            stats.merged,
            path.display(),
            stats.skipped
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in merger.into_entries() {
        let bytes = codec::encode(&entry)
            .with_context(|| format!("Failed to encode entry at {}", entry.start_time))?;
        out.write_all(&bytes)?;
    }

    Ok(())
}
