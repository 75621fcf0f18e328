//! CLI integration tests.
//!
//! Runs the binary as a subprocess and checks the flag surface, exit
//! codes and stream wiring.

use assert_cmd::Command;
use predicates::str;
use std::io::Write;

fn jsonfmt() -> Command {
    Command::cargo_bin("jsonfmt").unwrap()
}

#[test]
fn pretty_prints_stdin_by_default() {
    jsonfmt()
        .write_stdin("{\"a\":1}")
        .assert()
        .success()
        .stdout("{\n  \"a\": 1\n}\n")
        .stderr(str::is_empty());
}

#[test]
fn compact_flag_minifies() {
    jsonfmt()
        .arg("-c")
        .write_stdin("{ \"a\" : [ 1 , 2 ] }")
        .assert()
        .success()
        .stdout("{\"a\":[1,2]}\n");
}

#[test]
fn sort_keys_flag_orders_recursively() {
    jsonfmt()
        .args(["-s", "-c"])
        .write_stdin("{\"b\":{\"z\":1,\"a\":2},\"a\":3}")
        .assert()
        .success()
        .stdout("{\"a\":3,\"b\":{\"a\":2,\"z\":1}}\n");
}

#[test]
fn custom_indent_and_prefix() {
    jsonfmt()
        .args(["--indent", "\t", "--prefix", "> "])
        .write_stdin("[1]")
        .assert()
        .success()
        .stdout("[\n> \t1\n> ]\n");
}

#[test]
fn ndjson_stream_formats_every_value() {
    jsonfmt()
        .arg("-c")
        .write_stdin("{\"a\":1}\n{\"b\":2}\n{\"c\":3}\n")
        .assert()
        .success()
        .stdout("{\"a\":1}\n{\"b\":2}\n{\"c\":3}\n");
}

#[test]
fn validate_reports_count_and_writes_no_json() {
    jsonfmt()
        .arg("--validate")
        .write_stdin("{\"a\":1}\n{\"b\":2}")
        .assert()
        .success()
        .stdout(str::is_empty())
        .stderr(str::contains("Validated 2 JSON value(s)"));
}

#[test]
fn validate_fails_on_malformed_value() {
    jsonfmt()
        .arg("--validate")
        .write_stdin("{\"a\":1}\n{bad}")
        .assert()
        .failure()
        .stdout(str::is_empty())
        .stderr(str::contains("[ERROR]"))
        .stderr(str::contains("Syntax error"));
}

#[test]
fn syntax_error_keeps_prior_output_and_fails() {
    jsonfmt()
        .arg("-c")
        .write_stdin("{\"a\":1}\n{\"b\":}")
        .assert()
        .failure()
        .stdout("{\"a\":1}\n")
        .stderr(str::contains("Syntax error at line 2"));
}

#[test]
fn missing_input_file_fails() {
    jsonfmt()
        .args(["-i", "/no/such/file.json"])
        .assert()
        .failure()
        .stderr(str::contains("Error opening file"));
}

#[test]
fn reads_input_file_and_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("in.json");
    let output_path = dir.path().join("out.json");
    let mut input = std::fs::File::create(&input_path).unwrap();
    write!(input, "{{\"z\": 1, \"a\": 2}}").unwrap();

    jsonfmt()
        .args(["-c"])
        .args(["-i", input_path.to_str().unwrap()])
        .args(["-o", output_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(str::is_empty())
        .stderr(str::contains("Processing:"))
        .stderr(str::contains("Saved to:"));

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, "{\"z\":1,\"a\":2}\n");
}

#[test]
fn piped_output_is_not_colored_by_default() {
    let assert = jsonfmt().write_stdin("{\"a\":1}").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn color_always_forces_escapes() {
    let assert = jsonfmt()
        .args(["--color", "always"])
        .write_stdin("{\"a\":1}")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains('\u{1b}'));
}

#[test]
fn help_shows_usage() {
    jsonfmt()
        .arg("--help")
        .assert()
        .success()
        .stdout(str::contains("Usage: jsonfmt"));
}

#[test]
fn version_flag_prints_version() {
    jsonfmt()
        .arg("-V")
        .assert()
        .success()
        .stdout(str::contains("jsonfmt"));
}
