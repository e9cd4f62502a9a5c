//! The history entry value type.

use crate::codec::EncodeError;
use serde::{Deserialize, Serialize};

/// One command from a zsh history file.
///
/// Timestamps are seconds since the Unix epoch. Multi-line commands keep
/// their embedded newlines; the on-disk continuation markers are a storage
/// concern and never appear here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The command text.
    pub command: String,
    /// When the command started.
    pub start_time: i64,
    /// When the command finished.
    pub finish_time: i64,
}

impl HistoryEntry {
    /// Build an entry, rejecting a finish time earlier than the start time.
    pub fn new(
        command: impl Into<String>,
        start_time: i64,
        finish_time: i64,
    ) -> Result<Self, EncodeError> {
        if finish_time < start_time {
            return Err(EncodeError::NegativeDuration {
                start: start_time,
                finish: finish_time,
            });
        }
        Ok(HistoryEntry {
            command: command.into(),
            start_time,
            finish_time,
        })
    }

    /// Seconds the command ran for.
    pub fn duration(&self) -> i64 {
        self.finish_time - self.start_time
    }
}
