//! # Strategy Classifier
//!
//! File: cli/src/snippet/classify.rs
//!
//! Maps a language tag and the code text to exactly one rendering strategy.
//! Only `bash` and `go` are special; every other tag, known or not, goes to the
//! delegated highlighter.
//!
use serde::Serialize;
use std::fmt;

/// How a snippet body is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    /// One shell command with a `$` prompt, highlighted.
    SingleLineShell,
    /// A shell script split into comment and command lines.
    MultiLineShell,
    /// A one-line Go statement shown as escaped text.
    SingleLineLiteral,
    /// Handed to the general-purpose highlighter.
    Delegated,
}

impl RenderStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleLineShell => "single-line-shell",
            Self::MultiLineShell => "multi-line-shell",
            Self::SingleLineLiteral => "single-line-literal",
            Self::Delegated => "delegated",
        }
    }
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects the strategy for a snippet.
///
/// The title flag is accepted for call-site symmetry with the container but never
/// changes the result; a title only affects container styling.
pub fn classify(language: &str, code: &str, _has_title: bool) -> RenderStrategy {
    let multi_line = code.contains('\n');
    match (language, multi_line) {
        ("bash", false) => RenderStrategy::SingleLineShell,
        ("bash", true) => RenderStrategy::MultiLineShell,
        ("go", false) => RenderStrategy::SingleLineLiteral,
        _ => RenderStrategy::Delegated,
    }
}
