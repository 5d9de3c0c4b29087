//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("markymark")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.")
        .assert()
        .success()
        .stdout(predicate::str::contains("header level=1 \"Heading\""))
        .stdout(predicate::str::contains("paragraph \"Paragraph.\""));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "# Heading\n\nParagraph with *emphasis*.").unwrap();

    cargo_bin_cmd!("markymark")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("header"))
        .stdout(predicate::str::contains("  italic \"emphasis\""));
}

#[test]
fn test_parse_json() {
    let output = cargo_bin_cmd!("markymark")
        .args(["parse", "--json"])
        .write_stdin("- a\n- b")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json[0]["kind"]["type"], "list");
    assert_eq!(json[0]["kind"]["ordered"], false);
    assert_eq!(json[0]["children"].as_array().map(Vec::len), Some(2));
    assert_eq!(json[0]["children"][1]["content"], "b");
}

#[test]
fn test_parse_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");

    fs::write(&test_file, "| a |\n|---|").unwrap();
    fs::write(&config_file, "flavor = \"commonmark\"").unwrap();

    cargo_bin_cmd!("markymark")
        .args([
            "parse",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("paragraph"))
        .stdout(predicate::str::contains("table").not());
}

#[test]
fn test_parse_discovers_config_next_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "go to https://example.com now").unwrap();
    fs::write(temp_dir.path().join(".markymark.toml"), "flavor = \"gfm\"").unwrap();

    cargo_bin_cmd!("markymark")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("link url=\"https://example.com\""));
}

#[test]
fn test_flavor_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "~~gone~~").unwrap();
    fs::write(temp_dir.path().join("markymark.toml"), "flavor = \"standard\"").unwrap();

    cargo_bin_cmd!("markymark")
        .args(["parse", "--flavor", "commonmark", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("strikethrough").not());
}

#[test]
fn test_contentful_flavor_alias() {
    cargo_bin_cmd!("markymark")
        .args(["parse", "--flavor", "contentful"])
        .write_stdin("~~gone~~")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("paragraph"))
        .stdout(predicate::str::contains("  strikethrough \"gone\""));
}
