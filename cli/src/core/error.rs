//! # DocSnip Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout DocSnip.
//!
//! ## Architecture
//!
//! The error system consists of three pieces:
//! - `DocsnipError`: the application error enum, derived with `thiserror`
//! - `ClipboardError`: the single recoverable failure of the copy action
//! - `Result<T>`: a type alias for `anyhow::Result<T>` used by command handlers
//!
//! Classification and shell highlighting have no error path at all; they are
//! total functions. Only configuration, input loading, template rendering and
//! the clipboard write can fail, and only the first three ever reach `main`.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if manifest.snippet.is_empty() {
//!     return Err(DocsnipError::Input(format!("No snippets in {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read snippet file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the DocSnip application.
#[derive(Error, Debug)]
pub enum DocsnipError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Why a clipboard write did not happen.
///
/// Both variants are recoverable: the copy controller logs them and leaves
/// the button state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The platform refused the write (occupied, conversion failure, ...).
    #[error("clipboard access denied: {0}")]
    Denied(String),

    /// No clipboard is reachable (headless session, unsupported platform).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = DocsnipError::Config("Unknown theme 'neon'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Unknown theme 'neon'"
        );

        let input_err = DocsnipError::Input("No code supplied".into());
        assert_eq!(input_err.to_string(), "Input error: No code supplied");

        let clip_err = ClipboardError::Unavailable("no display".into());
        assert_eq!(clip_err.to_string(), "clipboard unavailable: no display");
    }

    #[test]
    fn test_clipboard_error_equality() {
        assert_eq!(
            ClipboardError::Denied("busy".into()),
            ClipboardError::Denied("busy".into())
        );
        assert_ne!(
            ClipboardError::Denied("x".into()),
            ClipboardError::Unavailable("x".into())
        );
    }
}
