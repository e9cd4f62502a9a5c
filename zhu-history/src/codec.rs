//! Decoding and encoding of logical history records.
//!
//! On-disk grammar of one record:
//!
//! ```text
//! ":" " " <startTime digits> ":" <duration digits> ";" <command, metafied> LF
//! ```
//!
//! [`decode`] takes a logical record as produced by
//! [`RecordReader`](crate::lines::RecordReader), with continuations already
//! joined and the terminator stripped. [`encode`] produces the physical byte
//! form including continuation backslashes and the final terminator, so its
//! output can be appended to a history file as-is.

use crate::entry::HistoryEntry;
use crate::meta::{self, UnmetafyError};
use thiserror::Error;
use tracing::warn;

const LF: u8 = b'\n';
const BACKSLASH: u8 = b'\\';
const SPACE: u8 = b' ';

/// A logical record that does not parse as a history entry.
///
/// Decode failures are per-record; callers are expected to log them and move
/// on to the next record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("record does not start with `: `")]
    MissingPrefix,
    #[error("expected a decimal start time terminated by `:`")]
    BadStartTime,
    #[error("expected a decimal duration terminated by `;`")]
    BadDuration,
    #[error(transparent)]
    Unmetafy(#[from] UnmetafyError),
}

/// An entry that cannot be serialized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("negative duration: start {start} is after finish {finish}")]
    NegativeDuration { start: i64, finish: i64 },
}

/// Read a non-empty run of decimal digits up to `terminator`, returning the
/// value and the bytes after the terminator.
fn read_number(input: &[u8], terminator: u8) -> Option<(i64, &[u8])> {
    let end = input.iter().position(|&b| b == terminator)?;
    let digits = &input[..end];
    if digits.is_empty() || !digits.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = std::str::from_utf8(digits).ok()?.parse::<i64>().ok()?;
    Some((value, &input[end + 1..]))
}

/// Parse one logical record into a [`HistoryEntry`].
pub fn decode(record: &[u8]) -> Result<HistoryEntry, DecodeError> {
    let rest = record
        .strip_prefix(b": ")
        .ok_or(DecodeError::MissingPrefix)?;
    let (start_time, rest) = read_number(rest, b':').ok_or(DecodeError::BadStartTime)?;
    let (duration, rest) = read_number(rest, b';').ok_or(DecodeError::BadDuration)?;

    let payload = meta::unmetafy(rest)?;
    let command = match String::from_utf8(payload) {
        Ok(text) => text,
        Err(err) => {
            warn!("command contains invalid UTF-8, replacing with U+FFFD");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    Ok(HistoryEntry {
        command,
        start_time,
        finish_time: start_time.saturating_add(duration),
    })
}

/// Serialize a [`HistoryEntry`] into its physical byte form.
///
/// Embedded newlines get a backslash prefix so a later read joins the lines
/// back together. If the payload would end in a backslash (possibly followed
/// by spaces), one marker space is appended so the terminator is not misread
/// as a continuation.
pub fn encode(entry: &HistoryEntry) -> Result<Vec<u8>, EncodeError> {
    let duration = entry.duration();
    if duration < 0 {
        return Err(EncodeError::NegativeDuration {
            start: entry.start_time,
            finish: entry.finish_time,
        });
    }

    let line = format!(": {}:{};{}", entry.start_time, duration, entry.command);

    let mut out = Vec::with_capacity(line.len() + 2);
    let mut end_backslashed = false;
    for &b in line.as_bytes() {
        end_backslashed = b == BACKSLASH || (end_backslashed && b == SPACE);

        if b == LF {
            out.push(BACKSLASH);
        }
        out.push(b);
    }

    if end_backslashed {
        out.push(SPACE);
    }
    out.push(LF);

    Ok(out)
}
