//! # DocSnip CLI Copy Integration Tests
//!
//! File: cli/tests/copy.rs
//!
//! ## Overview
//!
//! Integration tests for `docsnip copy`.
//!
//! **Note:** Test machines usually have no clipboard. The command must still
//! exit successfully and show the idle label; when a clipboard is present the
//! copied label follows. The full `Copy` -> `Copied!` -> `Copy` sequence is
//! covered by the paused-clock unit tests in `commands/copy.rs`.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_copy_shows_idle_label_and_succeeds() {
    docsnip_cmd()
        .args(["copy", "-c", "go install ./cmd/godeps", "--no-wait"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[copy] Copy\n"));
}

#[test]
fn test_copy_without_code_fails() {
    docsnip_cmd()
        .args(["copy", "--no-wait"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No code supplied"));
}
