//! Codec for zsh's extended history file format.
//!
//! This crate provides:
//! - Byte escaping for zsh's reserved byte values ("metafication")
//! - Reassembly of logical records from backslash-continued physical lines
//! - Parsing and building of `: <start>:<duration>;<command>` records
//! - Chronological merging of entries from multiple history files
//!
//! # Module Structure
//!
//! - [`meta`] - metafy/unmetafy byte escaping
//! - [`lines`] - logical record reassembly
//! - [`entry`] - the [`HistoryEntry`] value type
//! - [`codec`] - record decoding and encoding
//! - [`merge`] - timestamp-ordered merge of decoded entries
//!
//! The crate never opens files itself; every reader/writer is supplied by the
//! caller as a plain [`std::io::Read`] or [`std::io::Write`].

pub mod codec;
pub mod entry;
pub mod lines;
pub mod merge;
pub mod meta;

pub use crate::codec::{DecodeError, EncodeError};
pub use crate::entry::HistoryEntry;
pub use crate::lines::RecordReader;
pub use crate::merge::{HistoryMerger, MergeStats};
