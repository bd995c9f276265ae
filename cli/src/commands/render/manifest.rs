//! # Snippet Manifests
//!
//! File: cli/src/commands/render/manifest.rs
//!
//! A manifest lists the code blocks of one documentation page in TOML:
//!
//! ```toml
//! title = "Installation"
//!
//! [[snippet]]
//! title = "Install the CLI"
//! language = "bash"
//! code = "go install github.com/example/godeps/cmd/godeps@latest"
//!
//! [[snippet]]
//! language = "go"
//! code = """
//! deps, err := parser.ParseFile("./app")
//! if err != nil {
//!     log.Fatal(err)
//! }"""
//! show_line_numbers = false
//! ```
//!
//! Snippets without `show_line_numbers` use the configured default.
//!
use crate::common::fs::io;
use crate::core::error::{DocsnipError, Result};
use crate::snippet::SnippetRequest;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Page title, used by `--page` output.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "snippet")]
    pub snippets: Vec<ManifestSnippet>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ManifestSnippet {
    pub code: String,
    pub language: String,
    #[serde(default)]
    pub show_line_numbers: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_file_to_string(path)?;
        let manifest = Self::parse(&content)
            .with_context(|| format!("Invalid snippet manifest: {}", path.display()))?;
        info!(
            "Loaded {} snippet(s) from {}",
            manifest.snippets.len(),
            path.display()
        );
        Ok(manifest)
    }

    fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content).context("Failed to parse TOML")?;
        if manifest.snippets.is_empty() {
            return Err(anyhow!(DocsnipError::Input(
                "Manifest contains no [[snippet]] entries.".to_string()
            )));
        }
        Ok(manifest)
    }

    /// Requests in manifest order.
    pub fn into_requests(self, default_line_numbers: bool) -> Vec<SnippetRequest> {
        self.snippets
            .into_iter()
            .map(|s| {
                let mut request = SnippetRequest::new(s.code, s.language)
                    .with_line_numbers(s.show_line_numbers.unwrap_or(default_line_numbers));
                request.title = s.title;
                request
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_apply_defaults() -> Result<()> {
        let manifest = Manifest::parse(
            r#"
            title = "Examples"

            [[snippet]]
            language = "bash"
            code = "npm run build"
            title = "Build"

            [[snippet]]
            language = "json"
            code = "{}"
            show_line_numbers = true
            "#,
        )?;
        assert_eq!(manifest.title.as_deref(), Some("Examples"));

        let requests = manifest.into_requests(false);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].title.as_deref(), Some("Build"));
        assert!(!requests[0].show_line_numbers); // Default applied
        assert!(requests[1].show_line_numbers); // Explicit value kept
        Ok(())
    }

    #[test]
    fn test_empty_manifest_is_rejected() {
        let err = Manifest::parse("title = \"Nothing\"").unwrap_err();
        assert!(err.to_string().contains("no [[snippet]] entries"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = Manifest::parse("[[snippet]]\nlanguage = \"bash\"\ncode = \"ls\"\ncolor = \"red\"");
        assert!(result.is_err());
    }
}
