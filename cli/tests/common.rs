//! # DocSnip CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests (`render.rs`, `classify.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and pulls
//! this module in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// # Get DocSnip Command (`docsnip_cmd`)
///
/// `assert_cmd::Command` for the compiled `docsnip` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn docsnip_cmd() -> Command {
    Command::cargo_bin("docsnip").expect("Failed to find docsnip binary for testing")
}

/// Workspace isolated from any real user or project configuration.
///
/// The command runs inside a fresh temp directory (so no `.docsnip.toml` from
/// the checkout is picked up) with `DOCSNIP_CONFIG` pointing at `config_toml`.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(config_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        std::fs::write(dir.path().join("user-config.toml"), config_toml)
            .expect("Failed to write sandbox config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = docsnip_cmd();
        cmd.current_dir(self.dir.path())
            .env("DOCSNIP_CONFIG", self.dir.path().join("user-config.toml"))
            .env_remove("RUST_LOG");
        cmd
    }
}
