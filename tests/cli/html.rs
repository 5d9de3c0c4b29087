//! Html subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_html_stdin() {
    cargo_bin_cmd!("markymark")
        .arg("html")
        .write_stdin("# Title\n\nSome **bold** text.\n")
        .assert()
        .success()
        .stdout("<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>\n");
}

#[test]
fn test_html_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "> quote\n").unwrap();

    cargo_bin_cmd!("markymark")
        .args(["html", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<blockquote>\n<p>quote</p>\n</blockquote>\n");
}

#[test]
fn test_html_styling_flags() {
    cargo_bin_cmd!("markymark")
        .args([
            "html",
            "--link-target",
            "_blank",
            "--code-class-prefix",
            "lang-",
        ])
        .write_stdin("[a](b)\n\n```sh\nls\n```\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<a href=\"b\" target=\"_blank\">a</a>",
        ))
        .stdout(predicate::str::contains("<code class=\"lang-sh\">"));
}

#[test]
fn test_html_gfm_flavor() {
    cargo_bin_cmd!("markymark")
        .args(["html", "--flavor", "gfm"])
        .write_stdin("see https://x.org\n")
        .assert()
        .success()
        .stdout("<p>see <a href=\"https://x.org\">https://x.org</a></p>\n");
}
