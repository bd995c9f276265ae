//! # DocSnip Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers, kept apart from
//! command-specific logic (`commands::`), core infrastructure (`core::`) and
//! the rendering engine (`snippet::`, `copy::`).
//!
//! - **`fs`**: reading snippet sources and manifests, writing rendered output.
//!

/// Utilities for filesystem operations.
pub mod fs;
