//! Byte escaping for zsh's reserved byte values.
//!
//! zsh reserves a set of byte values as internal lexer tokens; a command
//! containing any of them is stored with each reserved byte replaced by the
//! `Meta` marker followed by the byte XORed with `0x20`. See `imeta` /
//! `inittyptab` in the zsh sources.

use thiserror::Error;

/// Escape marker byte.
pub const META: u8 = 0x83;
/// XOR mask applied to the byte following [`META`].
pub const META_MASK: u8 = 0x20;

const NULL: u8 = 0x00;
const MARKER: u8 = 0xa2;
const POUND: u8 = 0x84;
const LAST_NORMAL_TOK: u8 = 0x9c;
const SNULL: u8 = 0x9d;
const NULARG: u8 = 0xa1;

/// The final byte of the input is the escape marker, so the byte it should
/// pair with is missing. Indicates truncated or corrupt storage.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("meta marker at end of input, pairing byte missing")]
pub struct UnmetafyError;

/// Whether `byte` is reserved by the format and must be escaped.
#[inline]
pub fn is_meta(byte: u8) -> bool {
    matches!(byte, NULL | META | MARKER)
        || (POUND..=LAST_NORMAL_TOK).contains(&byte)
        || (SNULL..=NULARG).contains(&byte)
}

/// Escape every reserved byte in `bytes`.
pub fn metafy(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        if is_meta(b) {
            out.push(META);
            out.push(b ^ META_MASK);
        } else {
            out.push(b);
        }
    }
    out
}

/// Undo [`metafy`].
pub fn unmetafy(bytes: &[u8]) -> Result<Vec<u8>, UnmetafyError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter();
    while let Some(&b) = iter.next() {
        if b == META {
            let &paired = iter.next().ok_or(UnmetafyError)?;
            out.push(paired ^ META_MASK);
        } else {
            out.push(b);
        }
    }
    Ok(out)
}
