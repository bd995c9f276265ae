//! # DocSnip Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` and stdin used by the commands to load
//! snippet code and manifests and to write rendered HTML.
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing; fails if the path is a file.
//! - **`read_file_to_string`**: `fs::read_to_string` with path context on errors.
//! - **`read_snippet_source`**: reads snippet code from a file, or from stdin for `-`,
//!   dropping one trailing line terminator.
//! - **`write_string_to_file`**: writes output, creating the parent directory first.
//!
use crate::core::error::{DocsnipError, Result};
use anyhow::Context;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating it if needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(DocsnipError::Input(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads snippet code from `path`, or from stdin when `path` is `-`.
///
/// Files almost always end with a newline, which would otherwise turn every
/// one-line snippet into a multi-line one. Exactly one trailing `\n` or `\r\n`
/// is removed; anything before it is kept verbatim.
pub fn read_snippet_source(path: &Path) -> Result<String> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read snippet from stdin")?;
        debug!("Read {} bytes of snippet code from stdin", buffer.len());
        buffer
    } else {
        read_file_to_string(path)?
    };
    Ok(strip_one_line_terminator(raw))
}

fn strip_one_line_terminator(mut text: String) -> String {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    } else if text.ends_with('\n') {
        text.truncate(text.len() - 1);
    }
    text
}

/// Writes string content to a file, overwriting it, after ensuring the parent
/// directory exists.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
