// wordmask/tests/cli_integration_tests.rs
//! Command-line integration tests for the `wordmask` binary.
//!
//! Each test spawns the built binary with `assert_cmd`, feeds input through
//! stdin or a temporary file, and checks stdout, stderr and the exit code.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn wordmask() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("wordmask"));
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("WORDMASK_ALLOW_DEBUG_PII");
    cmd.env_remove("WORDMASK_MASK");
    cmd
}

fn dictionary_file(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn sanitize_masks_default_words_from_stdin() {
    wordmask()
        .args(["sanitize"])
        .write_stdin("什么垃 圾打野，SB\n")
        .assert()
        .success()
        .stdout("什么**打野**\n")
        .stderr(predicate::str::contains("Matched 2 sensitive word(s):"));
}

#[test]
fn sanitize_passes_clean_text_through() {
    wordmask()
        .args(["sanitize", "--no-summary"])
        .write_stdin("Hello, World!\n")
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn sanitize_uses_custom_mask() {
    wordmask()
        .args(["sanitize", "--mask", "#", "--no-summary"])
        .write_stdin("s.b")
        .assert()
        .success()
        .stdout("##\n");
}

#[test]
fn sanitize_rejects_multi_char_mask() {
    wordmask()
        .args(["sanitize", "--mask", "##"])
        .write_stdin("sb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one character"));
}

#[test]
fn sanitize_with_user_dictionary_only() -> Result<()> {
    let dict = dictionary_file("words:\n  - \"牛大大\"\n")?;
    wordmask()
        .args(["sanitize", "--no-defaults", "--no-summary", "--dictionary"])
        .arg(dict.path())
        .write_stdin("今天，牛大大去挑战灰大大了，sb")
        .assert()
        .success()
        .stdout("今天***去挑战灰大大了sb\n");
    Ok(())
}

#[test]
fn no_defaults_without_dictionary_fails() {
    wordmask()
        .args(["sanitize", "--no-defaults"])
        .write_stdin("sb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-defaults requires --dictionary"));
}

#[test]
fn sanitize_reads_file_and_writes_output_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "你是傻☺叉")?;

    wordmask()
        .args(["sanitize", "--quiet", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output)?, "你是**\n");
    Ok(())
}

#[test]
fn sanitize_line_buffered_keeps_lines() {
    wordmask()
        .args(["sanitize", "--line-buffered", "--no-summary"])
        .write_stdin("clean line\ns b\n垃圾 here\n")
        .assert()
        .success()
        .stdout("clean line\n**\n**here\n");
}

#[test]
fn sanitize_line_buffered_file_keeps_lines() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("lines.txt");
    fs::write(&input, "hello\ns b here\n垃圾\n")?;

    wordmask()
        .args(["sanitize", "--line-buffered", "--no-summary", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("hello\n**here\n**\n");
    Ok(())
}

#[test]
fn scan_prints_counts() {
    wordmask()
        .args(["scan"])
        .write_stdin("sb 垃圾 SB")
        .assert()
        .success()
        .stdout("sb: 2\n垃圾: 1\nTotal: 3\n");
}

#[test]
fn scan_json_output() -> Result<()> {
    let assert = wordmask()
        .args(["scan", "--json-stdout"])
        .write_stdin("傻逼，傻逼")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let json: Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["total_occurrences"], 2);
    assert_eq!(json["words"][0]["word"], "傻逼");
    assert_eq!(json["words"][0]["occurrences"], 2);
    Ok(())
}

#[test]
fn scan_fails_over_threshold() {
    wordmask()
        .args(["scan", "--fail-over-threshold", "1"])
        .write_stdin("sb sb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeding the threshold of 1"));
}

#[test]
fn scan_under_threshold_succeeds() {
    wordmask()
        .args(["scan", "--fail-over-threshold", "5"])
        .write_stdin("nothing to see")
        .assert()
        .success()
        .stdout("No sensitive words found.\n");
}
