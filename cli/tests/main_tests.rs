//! # DocSnip CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `docsnip` binary: `--version`, `--help`, and
//! argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_main_help_flag() {
    docsnip_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("render")
                .and(predicate::str::contains("classify"))
                .and(predicate::str::contains("copy")),
        );
}

#[test]
fn test_main_version_flag() {
    docsnip_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    docsnip_cmd()
        .arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_code_and_file_conflict() {
    docsnip_cmd()
        .args(["classify", "-c", "ls", "-f", "x.sh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
