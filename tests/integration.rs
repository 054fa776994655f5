// Integration tests for the lexiscore CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output for startup failures.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to build a Command for the lexiscore binary with an isolated HOME.
fn lexiscore(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("lexiscore").expect("binary should exist");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    lexiscore(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lexiscore"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    lexiscore(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("understandability"));
}

#[test]
fn missing_dictionary_aborts_before_scanning() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(root.path().join("files")).expect("files dir should create");
    fs::write(root.path().join("files/a.py"), "x = 1\n").expect("source should write");

    lexiscore(root.path())
        .arg(root.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dictionary not found"));
    assert!(!root.path().join("results.csv").exists());
}

#[test]
fn missing_configured_model_is_fatal() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(root.path().join("files")).expect("files dir should create");
    fs::write(root.path().join("words.txt"), "word\n").expect("dictionary should write");
    fs::write(
        root.path().join("lexiscore.toml"),
        r#"
[resources]
model = "missing-lexicon.toml"
"#,
    )
    .expect("config should write");

    lexiscore(root.path())
        .arg(root.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("language model load error"));
}

#[test]
fn missing_input_directory_is_fatal() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(root.path().join("words.txt"), "word\n").expect("dictionary should write");

    lexiscore(root.path())
        .arg(root.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input directory does not exist"));
}

#[test]
fn malformed_config_is_fatal() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(root.path().join("lexiscore.toml"), "[output\n").expect("config should write");

    lexiscore(root.path())
        .arg(root.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}
