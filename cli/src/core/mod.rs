//! # DocSnip Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the `Result` alias
//! - `templating`: the Tera templates for code blocks and pages
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{DocsnipError, Result}; // For error handling
//! use crate::core::templating::Templates; // For HTML output
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
