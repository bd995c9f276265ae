//! # Multi-line Command Splitter
//!
//! File: cli/src/snippet/split.rs
//!
//! Splits a shell script into one `ShellLine` per `\n`-delimited segment and
//! renders them. Comment lines (first non-blank character `#`) lose that `#`
//! and are shown behind a `#` marker without highlighting. All other lines keep
//! their original text and are highlighted behind a `$` prompt.
//!
use super::escape_text;
use super::highlight::highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Command,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Command => "command",
        }
    }

    /// Visual marker in front of the line.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Comment => "#",
            Self::Command => "$",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLine {
    pub text: String,
    pub kind: LineKind,
}

/// Classifies every segment of `code`. Always yields `count('\n') + 1` lines.
pub fn split_lines(code: &str) -> Vec<ShellLine> {
    code.split('\n')
        .map(|line| match line.trim().strip_prefix('#') {
            Some(comment) => ShellLine {
                text: comment.to_string(),
                kind: LineKind::Comment,
            },
            None => ShellLine {
                text: line.to_string(),
                kind: LineKind::Command,
            },
        })
        .collect()
}

/// Markup for one line, prompt or comment marker included.
pub fn render_line(line: &ShellLine) -> String {
    let prompt = format!(
        "<span class=\"prompt\">{}</span>",
        line.kind.prefix()
    );
    match line.kind {
        LineKind::Comment => format!(
            "<span class=\"line comment\">{}{}</span>",
            prompt,
            escape_text(&line.text)
        ),
        LineKind::Command => format!(
            "<span class=\"line command\">{} {}</span>",
            prompt,
            highlight(&line.text)
        ),
    }
}

/// Body for a multi-line shell snippet.
pub fn render_script(code: &str) -> String {
    let lines: Vec<String> = split_lines(code).iter().map(render_line).collect();
    format!("<pre class=\"shell\"><code>{}</code></pre>", lines.join("\n"))
}
