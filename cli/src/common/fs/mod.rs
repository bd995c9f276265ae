//! # DocSnip Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers shared by the commands. Currently only basic I/O:
//! loading snippet code and manifests, writing rendered HTML.
//!

/// Basic file I/O (`read_snippet_source`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
