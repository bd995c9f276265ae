//! # Shell Token Highlighter
//!
//! File: cli/src/snippet/highlight.rs
//!
//! ## Overview
//!
//! Lightweight emphasis for shell commands without a shell parser. A line is
//! HTML-escaped and then run through a fixed, ordered table of regex
//! substitutions. Every rule rewrites the *output* of the rule before it, so a
//! token matched by two rules ends up wrapped twice (a `--flag` inside a quoted
//! string becomes a flag span nested in a string span). That nesting is
//! expected output.
//!
//! Rule order:
//! 1. program names (`go`, `git`, `npm`, `yarn`, `docker`, `kubectl`)
//! 2. subcommand verbs (`get`, `install`, `run`, `build`, `start`, `test`, `exec`, `apply`)
//! 3. `@latest` and `.ext` style suffixes
//! 4. single- or double-quoted strings
//! 5. long flags (`--name`)
//!
//! Markers are `<span class=NAME>`. The class value is unquoted and contains no
//! dots or `--`, so markers from earlier rules are never matched by rules 3-5.
//!
//! ## Examples
//!
//! ```rust
//! assert_eq!(
//!     highlight("npm install"),
//!     "<span class=sh-program>npm</span> <span class=sh-subcommand>install</span>"
//! );
//! ```
//!
use super::escape_text;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Style category applied to a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisClass {
    /// Class A: program invocations.
    Program,
    /// Class B: subcommand verbs.
    Subcommand,
    /// Class C: versions and file extensions.
    Version,
    /// Class D: quoted string literals.
    Str,
    /// Class E: long-form flags.
    Flag,
}

impl EmphasisClass {
    pub const ALL: [EmphasisClass; 5] = [
        Self::Program,
        Self::Subcommand,
        Self::Version,
        Self::Str,
        Self::Flag,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Program => "sh-program",
            Self::Subcommand => "sh-subcommand",
            Self::Version => "sh-version",
            Self::Str => "sh-string",
            Self::Flag => "sh-flag",
        }
    }

    fn wrap(self, token: &str) -> String {
        format!("<span class={}>{}</span>", self.css_class(), token)
    }
}

const PROGRAMS: &[&str] = &["go", "git", "npm", "yarn", "docker", "kubectl"];
const SUBCOMMANDS: &[&str] = &[
    "get", "install", "run", "build", "start", "test", "exec", "apply",
];

enum Matcher {
    /// Whitespace-delimited token equal to one of the words.
    Words(&'static [&'static str]),
    Pattern(Regex),
}

struct Rule {
    matcher: Matcher,
    class: EmphasisClass,
}

impl Rule {
    fn pattern(pattern: &str, class: EmphasisClass) -> Self {
        let regex = Regex::new(pattern).expect("highlight rule pattern is valid");
        Self {
            matcher: Matcher::Pattern(regex),
            class,
        }
    }

    fn apply(&self, input: &str) -> String {
        match &self.matcher {
            Matcher::Words(words) => TOKEN
                .replace_all(input, |caps: &Captures| {
                    let token = &caps[0];
                    if words.contains(&token) {
                        self.class.wrap(token)
                    } else {
                        token.to_string()
                    }
                })
                .into_owned(),
            Matcher::Pattern(regex) => regex
                .replace_all(input, |caps: &Captures| self.class.wrap(&caps[0]))
                .into_owned(),
        }
    }
}

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("token pattern is valid"));

static RULES: LazyLock<[Rule; 5]> = LazyLock::new(|| {
    [
        Rule {
            matcher: Matcher::Words(PROGRAMS),
            class: EmphasisClass::Program,
        },
        Rule {
            matcher: Matcher::Words(SUBCOMMANDS),
            class: EmphasisClass::Subcommand,
        },
        Rule::pattern(r"@latest|\.[a-z]+\b", EmphasisClass::Version),
        Rule::pattern(r#""[^"]*"|'[^']*'"#, EmphasisClass::Str),
        Rule::pattern(r"--[A-Za-z0-9-]+", EmphasisClass::Flag),
    ]
});

/// Highlights one shell line. Never fails; text no rule matches passes through
/// (escaped) unchanged.
pub fn highlight(line: &str) -> String {
    RULES
        .iter()
        .fold(escape_text(line), |markup, rule| rule.apply(&markup))
}
