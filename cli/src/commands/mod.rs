//! # DocSnip Commands
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per `docsnip` subcommand. Each exposes an `*Args` struct parsed
//! by Clap and an async `handle_*` function called from `main`.
//!
//! - `render`: snippets (or a manifest of snippets) to HTML
//! - `classify`: strategy and line kinds of a snippet
//! - `copy`: clipboard write with copy-button feedback
//!
//! `source` holds the `--code` / `--file` / `--language` arguments the three
//! commands share.
//!

/// Prints the rendering strategy of a snippet.
pub mod classify;
/// Copies snippet code to the clipboard.
pub mod copy;
/// Renders snippets to HTML.
pub mod render;
/// Snippet input arguments shared by the commands.
pub mod source;
