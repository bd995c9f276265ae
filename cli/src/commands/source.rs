//! # Snippet Source Arguments
//!
//! File: cli/src/commands/source.rs
//!
//! Arguments shared by every command that takes a single snippet: the code
//! itself (`--code`) or a file to read it from (`--file`, `-` for stdin), plus
//! the language tag. When no language is given it is guessed from the file
//! extension.
//!
use crate::common::fs::io;
use crate::core::error::{DocsnipError, Result};
use crate::snippet::SnippetRequest;
use anyhow::anyhow;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Snippet code, passed literally.
    #[arg(short, long, conflicts_with = "file")]
    pub code: Option<String>,

    /// Read the snippet code from a file (`-` reads stdin). One trailing newline is dropped.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Language tag (`bash`, `go`, `json`, ...). Defaults to a guess from the file extension.
    #[arg(short, long)]
    pub language: Option<String>,
}

impl SourceArgs {
    /// Loads the code and resolves the language into a request.
    pub fn load(&self) -> Result<SnippetRequest> {
        let code = match (&self.code, &self.file) {
            (Some(code), _) => code.clone(),
            (None, Some(path)) => io::read_snippet_source(path)?,
            (None, None) => {
                return Err(anyhow!(DocsnipError::Input(
                    "No code supplied. Use --code <CODE> or --file <PATH>.".to_string()
                )))
            }
        };
        let language = match &self.language {
            Some(language) => language.clone(),
            None => self
                .file
                .as_deref()
                .and_then(language_from_extension)
                .ok_or_else(|| {
                    anyhow!(DocsnipError::Input(
                        "No language given and none could be inferred. Use --language <TAG>."
                            .to_string()
                    ))
                })?,
        };
        debug!("Loaded {} bytes of {} code", code.len(), language);
        Ok(SnippetRequest::new(code, language))
    }
}

/// Maps a file extension to a language tag. Shell scripts become `bash`;
/// any other extension is used as the tag as-is.
fn language_from_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let tag = match ext.as_str() {
        "sh" | "bash" | "zsh" => "bash".to_string(),
        _ => ext,
    };
    Some(tag)
}
