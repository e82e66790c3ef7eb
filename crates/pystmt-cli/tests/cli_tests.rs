//! Integration tests for the `pystmt` binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the binary end
//! to end: stdin/stdout piping, file I/O, root renaming, truncation flags,
//! and error exits for invalid JSON or invalid configuration.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Basic conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout() {
    let input = r#"{"key1": [1, 2, 3]}"#;

    Command::cargo_bin("pystmt")
        .unwrap()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("root = {}"))
        .stdout(predicate::str::contains("root['key1'] = [None] * 3"))
        .stdout(predicate::str::contains("root['key1'][2] = 3"));
}

#[test]
fn file_to_stdout() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .arg(sample_json_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("root['name'] = 'Alice'"))
        .stdout(predicate::str::contains("root['scores'] = [None] * 3"))
        .stdout(predicate::str::contains("root['address']['city'] = 'Portland'"))
        .stdout(predicate::str::contains("root['tags'] = []"));
}

#[test]
fn file_to_file() {
    let output_path = "/tmp/pystmt-test-output.py";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("pystmt")
        .unwrap()
        .args([sample_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.starts_with("root = {}\n"));
    assert!(content.ends_with('\n'));
    assert!(content.contains("root['age'] = 30"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn scalar_document() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .write_stdin("42")
        .assert()
        .success()
        .stdout("root = 42\n");
}

#[test]
fn empty_object_document() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("root = {}\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Root renaming
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn custom_root_long_flag() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .args(["--root", "data"])
        .write_stdin(r#"{"key": "value"}"#)
        .assert()
        .success()
        .stdout("data = {}\ndata['key'] = 'value'\n");
}

#[test]
fn custom_root_short_flag() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .args(["-r", "obj"])
        .write_stdin("[1]")
        .assert()
        .success()
        .stdout("obj = [None] * 1\nobj[0] = 1\n");
}

#[test]
fn empty_root_rejected() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .args(["--root", ""])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Truncation flags
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn max_value_length_truncates_long_strings() {
    let input = r#"{"alpha": "a very long string value"}"#;

    Command::cargo_bin("pystmt")
        .unwrap()
        .args(["--max-value-length", "5"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("root['alpha'] = 'a v...ue'"));
}

#[test]
fn max_key_length_truncates_long_keys() {
    let input = r#"{"extraordinarily_long_key": 1}"#;

    Command::cargo_bin("pystmt")
        .unwrap()
        .args(["--max-key-length", "6"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("root['ex...ey'] = 1"));
}

#[test]
fn unlimited_by_default() {
    let input = r#"{"alpha": "a very long string value"}"#;

    Command::cargo_bin("pystmt")
        .unwrap()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("'a very long string value'"))
        .stdout(predicate::str::contains("...").not());
}

#[test]
fn minus_one_means_unlimited() {
    let input = r#"{"alpha": "a very long string value"}"#;

    Command::cargo_bin("pystmt")
        .unwrap()
        .args(["--max-value-length", "-1"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("'a very long string value'"));
}

#[test]
fn length_below_minus_one_rejected() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .args(["--max-key-length", "-2"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("-2").or(predicate::str::contains("invalid")));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_fails() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"));
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .arg("/nonexistent/path/to/input.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and version
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--max-key-length"))
        .stdout(predicate::str::contains("--max-value-length"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("pystmt")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pystmt"));
}
