//! # DocSnip Snippet Rendering
//!
//! File: cli/src/snippet/mod.rs
//!
//! ## Overview
//!
//! Everything needed to turn a `SnippetRequest` (code text plus a language tag)
//! into HTML markup:
//!
//! - `classify`: picks one of four `RenderStrategy` variants
//! - `highlight`: ordered regex substitutions that mark shell tokens
//! - `split`: breaks multi-line shell scripts into comment/command lines
//! - `delegate`: the swappable general-purpose highlighter (syntect)
//! - `block`: the shared container that ties a rendered body to its copy button
//!
//! ## Usage
//!
//! ```rust
//! let renderer = Renderer::new(Box::new(SyntectDelegate::new("base16-ocean.dark")?), palette)?;
//! let block = CodeBlock::new(request, Arc::new(SystemClipboard));
//! let html = block.render(&renderer)?;
//! ```
//!
use serde::Deserialize;

pub mod block;
pub mod classify;
pub mod delegate;
pub mod highlight;
pub mod split;

pub use classify::{classify, RenderStrategy};

/// One code block as requested by a page.
///
/// `code` is never modified after construction; every strategy renders from
/// it and the copy button writes it back out verbatim.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnippetRequest {
    pub code: String,
    pub language: String,
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,
    #[serde(default)]
    pub title: Option<String>,
}

fn default_show_line_numbers() -> bool {
    true
}

impl SnippetRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            show_line_numbers: true,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// A blank title counts as no title.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn strategy(&self) -> RenderStrategy {
        classify(&self.language, &self.code, self.has_title())
    }
}

/// Escapes text for use as HTML element content.
///
/// Quotes are left as-is: the shell highlighter matches quoted strings after
/// escaping, and quotes are harmless outside attributes.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text("a < b && c > \"d\""),
            "a &lt; b &amp;&amp; c &gt; \"d\""
        );
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_has_title_ignores_blank() {
        let req = SnippetRequest::new("ls", "bash");
        assert!(!req.has_title());
        assert!(!req.clone().with_title("   ").has_title());
        assert!(req.with_title("Install").has_title());
    }

    #[test]
    fn test_deserialize_defaults() {
        let req: SnippetRequest = toml::from_str("code = \"ls\"\nlanguage = \"bash\"").unwrap();
        assert!(req.show_line_numbers);
        assert_eq!(req.title, None);
        assert_eq!(req.strategy(), RenderStrategy::SingleLineShell);
    }
}
