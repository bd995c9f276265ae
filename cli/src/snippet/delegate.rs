//! # Generic Highlight Delegate
//!
//! File: cli/src/snippet/delegate.rs
//!
//! ## Overview
//!
//! Snippets that are neither shell nor a one-line Go statement are rendered by a
//! general-purpose syntax highlighter. The rest of the renderer only sees the
//! `HighlightDelegate` trait, so the engine can be swapped without touching
//! classification or the shell paths.
//!
//! The only rule the renderer imposes on a delegate is in `render_delegated`:
//! single-line code never gets line numbers, whatever the caller asked for.
//!
//! ## Architecture
//!
//! - `HighlightDelegate`: capability trait, `render(code, language, show_line_numbers)`
//! - `RenderedView`: the markup a delegate produced
//! - `SyntectDelegate`: implementation on top of `syntect`'s bundled syntaxes and themes
//!
use crate::core::error::{DocsnipError, Result};
use crate::snippet::escape_text;
use anyhow::anyhow;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{start_highlighted_html_snippet, styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::{debug, warn};

/// Rendered output of a delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub markup: String,
    pub line_numbers: bool,
}

/// A general-purpose highlighter.
pub trait HighlightDelegate: Send + Sync {
    /// Renders `code` for the given language tag. Unknown tags must still
    /// produce a view (plain text at worst).
    fn render(&self, code: &str, language: &str, show_line_numbers: bool) -> RenderedView;
}

/// Calls the delegate, forcing line numbers off for single-line code.
pub fn render_delegated(
    delegate: &dyn HighlightDelegate,
    code: &str,
    language: &str,
    show_line_numbers: bool,
) -> RenderedView {
    let effective = show_line_numbers && code.contains('\n');
    if effective != show_line_numbers {
        debug!("Suppressing line numbers for single-line {} snippet", language);
    }
    delegate.render(code, language, effective)
}

/// Delegate backed by syntect.
pub struct SyntectDelegate {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntectDelegate {
    /// Loads the bundled syntaxes and the named bundled theme.
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(theme_name).ok_or_else(|| {
            let mut known: Vec<_> = themes.themes.keys().cloned().collect();
            known.sort();
            anyhow!(DocsnipError::Config(format!(
                "Unknown theme '{}'. Available themes: {}",
                theme_name,
                known.join(", ")
            )))
        })?;
        debug!("Loaded syntect theme '{}'", theme_name);
        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    fn highlight(
        &self,
        code: &str,
        language: &str,
        show_line_numbers: bool,
    ) -> std::result::Result<String, syntect::Error> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(language)
            .unwrap_or_else(|| {
                debug!("No syntax for '{}', using plain text", language);
                self.syntaxes.find_syntax_plain_text()
            });
        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let (mut html, _background) = start_highlighted_html_snippet(&self.theme);
        for (index, line) in LinesWithEndings::from(code).enumerate() {
            let regions = highlighter.highlight_line(line, &self.syntaxes)?;
            if show_line_numbers {
                html.push_str(&format!("<span class=\"line-number\">{}</span>", index + 1));
            }
            html.push_str(&styled_line_to_highlighted_html(
                &regions,
                IncludeBackground::No,
            )?);
        }
        html.push_str("</pre>");
        Ok(html)
    }
}

impl HighlightDelegate for SyntectDelegate {
    fn render(&self, code: &str, language: &str, show_line_numbers: bool) -> RenderedView {
        let markup = self
            .highlight(code, language, show_line_numbers)
            .unwrap_or_else(|e| {
                warn!(
                    "Syntax highlighting failed for '{}' snippet, rendering plain text: {}",
                    language, e
                );
                format!("<pre class=\"plain\"><code>{}</code></pre>", escape_text(code))
            });
        RenderedView {
            markup,
            line_numbers: show_line_numbers,
        }
    }
}
