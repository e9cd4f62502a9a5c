use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_zhu(args: &[&str]) -> Output {
    let zhu_path = env!("CARGO_BIN_EXE_zhu");

    Command::new(zhu_path)
        .args(args)
        .output()
        .expect("Failed to spawn zhu")
}

fn write_fixture(dir: &Path, name: &str, contents: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn decode_emits_one_json_object_per_entry() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_fixture(
        dir.path(),
        "history",
        b": 1639320933:2;sleep 2\n: 1111:0;echo one \\\\\n  echo two\n",
    );

    let output = run_zhu(&["decode", &history]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            r#"{"command":"sleep 2","startTime":1639320933,"finishTime":1639320935}"#,
            r#"{"command":"echo one \\\n  echo two","startTime":1111,"finishTime":1111}"#,
        ]
    );
}

#[test]
fn decode_skips_undecodable_records() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_fixture(
        dir.path(),
        "history",
        b"not a history line\n: 1639320933:2;sleep 2\n",
    );

    let output = run_zhu(&["decode", &history]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![r#"{"command":"sleep 2","startTime":1639320933,"finishTime":1639320935}"#]
    );
}

#[test]
fn encode_rebuilds_history_file_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let decoded = write_fixture(
        dir.path(),
        "entries.jsonl",
        concat!(
            "{\"command\":\"sleep 2\",\"startTime\":1639320933,\"finishTime\":1639320935}\n",
            "this line is not json\n",
            "{\"command\":\"echo one \\\\\\n  echo two\",\"startTime\":1111,\"finishTime\":1111}\n",
        )
        .as_bytes(),
    );

    let output = run_zhu(&["encode", &decoded]);
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        b": 1639320933:2;sleep 2\n: 1111:0;echo one \\\\\n  echo two\n".to_vec()
    );
}

#[test]
fn encode_fails_on_a_negative_duration() {
    let dir = tempfile::tempdir().unwrap();
    let decoded = write_fixture(
        dir.path(),
        "entries.jsonl",
        b"{\"command\":\"sleep 2\",\"startTime\":10,\"finishTime\":5}\n",
    );

    let output = run_zhu(&["encode", &decoded]);
    assert!(!output.status.success());
}

#[test]
fn merge_orders_entries_across_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_fixture(dir.path(), "first", b": 5:0;first five\n: 3:0;three\n");
    let second = write_fixture(dir.path(), "second", b": 5:0;second five\n: 1:0;one\n");

    let output = run_zhu(&["merge", &first, &second]);
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        b": 1:0;one\n: 3:0;three\n: 5:0;first five\n: 5:0;second five\n".to_vec()
    );
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-file").to_string_lossy().into_owned();

    let output = run_zhu(&["decode", &missing]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open"), "stderr:\n{stderr}");
}
