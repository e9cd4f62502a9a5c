//! Reassembly of logical history records from physical file lines.
//!
//! A multi-line command is stored across several physical lines: each line
//! except the last ends in a backslash, and the reader joins them back with an
//! `LF` at each join point. A terminating backslash that is real content gets
//! one marker space appended on write so it is not misread as a continuation;
//! that space is dropped again here.

use std::io::{BufRead, BufReader, Read};

const LF: u8 = b'\n';
const CR: u8 = b'\r';
const BACKSLASH: u8 = b'\\';
const SPACE: u8 = b' ';

/// Iterator over the logical records of a history byte stream.
///
/// Single-pass and finite; the reader is consumed, so iterating twice
/// requires reopening the source. An I/O error ends the iteration after it is
/// yielded, and any partially accumulated record is discarded.
pub struct RecordReader<R> {
    reader: BufReader<R>,
    line: Vec<u8>,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R) -> Self {
        RecordReader {
            reader: BufReader::new(source),
            line: Vec::new(),
            done: false,
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut record = Vec::new();
        loop {
            self.line.clear();
            match self.reader.read_until(LF, &mut self.line) {
                Ok(0) => {
                    self.done = true;
                    // a file without a trailing terminator still yields its
                    // last record
                    if record.is_empty() {
                        return None;
                    }
                    return Some(Ok(record));
                }
                Ok(_) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }

            // line separator: CRLF or LF
            if self.line.last() == Some(&LF) {
                self.line.pop();
                if self.line.last() == Some(&CR) {
                    self.line.pop();
                }
            }

            if self.line.last() == Some(&BACKSLASH) {
                // remove line continuation marker, record resumes on the
                // next physical line
                self.line.pop();
                record.extend_from_slice(&self.line);
                record.push(LF);
                continue;
            }

            drop_terminator_marker(&mut self.line);
            record.extend_from_slice(&self.line);
            return Some(Ok(record));
        }
    }
}

/// Drop the single marker space written after a terminating backslash.
///
/// Only applies when a backslash precedes the trailing run of spaces, and
/// removes exactly one space; everything else is content.
fn drop_terminator_marker(line: &mut Vec<u8>) {
    let spaces = line.iter().rev().take_while(|&&b| b == SPACE).count();
    if spaces == 0 || spaces == line.len() {
        return;
    }
    if line[line.len() - spaces - 1] == BACKSLASH {
        line.pop();
    }
}
