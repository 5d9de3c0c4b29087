//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help() {
    cargo_bin_cmd!("markymark")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MarkyMark parses Markdown"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("markymark")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("markymark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("markymark")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_invalid_flavor() {
    cargo_bin_cmd!("markymark")
        .args(["parse", "--flavor", "quarto"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("markymark")
        .args(["parse", "does-not-exist.md"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "flavor = \"nope\"").unwrap();

    cargo_bin_cmd!("markymark")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("# x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.toml"));
}
