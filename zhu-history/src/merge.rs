//! Timestamp-ordered merging of decoded history entries.

use crate::codec;
use crate::entry::HistoryEntry;
use crate::lines::RecordReader;
use std::collections::BTreeMap;
use std::io::Read;
use tracing::warn;

/// Per-source counters reported by [`HistoryMerger::add_source`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Entries decoded and queued for the merged output.
    pub merged: usize,
    /// Records that failed to decode and were skipped.
    pub skipped: usize,
}

/// Collects entries from any number of sources and replays them in ascending
/// `start_time` order.
///
/// Entries sharing a start time keep the relative order in which they were
/// inserted, whether they came from the same source or different ones.
/// Everything is materialized before output: ascending order cannot be
/// guaranteed until the last key has been seen, so there is no streaming
/// mode. Callers needing bounded memory must partition their inputs first.
#[derive(Debug, Default)]
pub struct HistoryMerger {
    entries: BTreeMap<i64, Vec<HistoryEntry>>,
}

impl HistoryMerger {
    pub fn new() -> Self {
        HistoryMerger::default()
    }

    /// Queue one entry for the merged output.
    pub fn insert(&mut self, entry: HistoryEntry) {
        self.entries.entry(entry.start_time).or_default().push(entry);
    }

    /// Decode every record of `source` into the merge set.
    ///
    /// A record that fails to decode is logged and skipped; the rest of the
    /// source still contributes. I/O errors abort the source and propagate.
    pub fn add_source<R: Read>(&mut self, source: R) -> std::io::Result<MergeStats> {
        let mut stats = MergeStats::default();

        for record in RecordReader::new(source) {
            let record = record?;
            match codec::decode(&record) {
                Ok(entry) => {
                    self.insert(entry);
                    stats.merged += 1;
                }
                Err(err) => {
                    warn!(
                        "failed to parse {:?}: {err}",
                        String::from_utf8_lossy(&record)
                    );
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }

    /// All queued entries, ascending by start time.
    pub fn into_entries(self) -> impl Iterator<Item = HistoryEntry> {
        self.entries.into_values().flatten()
    }
}
