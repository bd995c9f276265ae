//! # DocSnip CLI Classify Integration Tests
//!
//! File: cli/tests/classify.rs
//!
//! ## Overview
//!
//! Integration tests for `docsnip classify`: strategy selection through the
//! binary, language inference from file names, and line listings.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_classify_strategies() {
    let cases = [
        ("bash", "ls -la", "single-line-shell\n"),
        ("go", "x := 1", "single-line-literal\n"),
        ("json", "{}", "delegated\n"),
    ];
    for (language, code, expected) in cases {
        docsnip_cmd()
            .args(["classify", "-l", language, "-c", code])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_classify_multi_line_lists_lines() {
    docsnip_cmd()
        .args(["classify", "-l", "bash", "-c", "# note\nls -la"])
        .assert()
        .success()
        .stdout("multi-line-shell\n1\tcomment\t note\n2\tcommand\tls -la\n");
}

#[test]
fn test_classify_file_infers_language() {
    let sandbox = Sandbox::new();
    let script = sandbox.write("install.sh", "npm install\n");

    sandbox
        .cmd()
        .args(["classify", "-f"])
        .arg(&script)
        .assert()
        .success()
        .stdout("single-line-shell\n");
}

#[test]
fn test_classify_reads_stdin() {
    docsnip_cmd()
        .args(["classify", "-l", "go", "-f", "-"])
        .write_stdin("package main\n\nfunc main() {}\n")
        .assert()
        .success()
        .stdout("delegated\n");
}

#[test]
fn test_classify_without_code_fails() {
    docsnip_cmd()
        .args(["classify", "-l", "bash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No code supplied"));
}
