//! End-to-end tests over the full read/parse/serialize pipeline.

use std::io::Cursor;
use zhu_history::{HistoryEntry, HistoryMerger, RecordReader, codec};

fn decode_file(bytes: &[u8]) -> Vec<HistoryEntry> {
    RecordReader::new(Cursor::new(bytes.to_vec()))
        .map(|record| codec::decode(&record.unwrap()).unwrap())
        .collect()
}

fn encode_entries(entries: &[HistoryEntry]) -> Vec<u8> {
    entries
        .iter()
        .flat_map(|entry| codec::encode(entry).unwrap())
        .collect()
}

#[test]
fn decodes_a_history_file() {
    let entries = decode_file(b": 1639320933:2;sleep 2\n");
    assert_eq!(
        entries,
        vec![HistoryEntry::new("sleep 2", 1639320933, 1639320935).unwrap()]
    );
}

#[test]
fn decodes_a_multi_line_command() {
    let entries = decode_file(b": 1111:0;echo one \\\\\n  echo two\n");
    assert_eq!(
        entries,
        vec![HistoryEntry::new("echo one \\\n  echo two", 1111, 1111).unwrap()]
    );
}

#[test]
fn encoded_files_decode_back_to_the_same_entries() {
    let entries = vec![
        HistoryEntry::new("echo 1 2 3", 1639324265, 1639324265).unwrap(),
        HistoryEntry::new("sleep 2", 1639320933, 1639320935).unwrap(),
        HistoryEntry::new("echo one \\\n  echo two", 1111, 1111).unwrap(),
        HistoryEntry::new("echo one \\", 1639320933, 1639320933).unwrap(),
        HistoryEntry::new("echo one \\ ", 1639320933, 1639320933).unwrap(),
        HistoryEntry::new("", 7, 7).unwrap(),
        HistoryEntry::new("echo \"quoted\" {1,2,3}", 9, 12).unwrap(),
    ];

    assert_eq!(decode_file(&encode_entries(&entries)), entries);
}

#[test]
fn merge_output_is_a_single_ordered_history_file() {
    let first = b": 5:0;first five\n: 3:0;three\n";
    let second = b": 5:0;second five\n: 1:0;one\n";

    let mut merger = HistoryMerger::new();
    merger.add_source(Cursor::new(first.to_vec())).unwrap();
    merger.add_source(Cursor::new(second.to_vec())).unwrap();

    let merged: Vec<HistoryEntry> = merger.into_entries().collect();
    let starts: Vec<i64> = merged.iter().map(|e| e.start_time).collect();
    assert_eq!(starts, vec![1, 3, 5, 5]);

    // ties keep arrival order across sources
    assert_eq!(merged[2].command, "first five");
    assert_eq!(merged[3].command, "second five");

    let bytes = encode_entries(&merged);
    assert_eq!(
        bytes,
        b": 1:0;one\n: 3:0;three\n: 5:0;first five\n: 5:0;second five\n".to_vec()
    );
}
