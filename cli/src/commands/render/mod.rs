//! # DocSnip Render Command
//!
//! File: cli/src/commands/render/mod.rs
//!
//! ## Overview
//!
//! `docsnip render` turns snippets into HTML code blocks. Input is either one
//! snippet (`--code` / `--file` plus `--language`) or a TOML manifest holding
//! every block of a page (`--manifest`). Output is the block markup, or with
//! `--page` a standalone HTML document including the stylesheet.
//!
//! ## Examples
//!
//! ```bash
//! # One command, printed to stdout
//! docsnip render -l bash -c "go install github.com/example/godeps/cmd/godeps@latest"
//!
//! # A Go source file with a title bar and no line numbers
//! docsnip render -f main.go -t "main.go" --no-line-numbers
//!
//! # A whole page from a manifest
//! docsnip render -m installation.toml --page -o site/installation.html
//! ```
//!
//! Flow:
//! 1. Load configuration (theme, line-number default, palette)
//! 2. Collect snippet requests from the arguments or the manifest
//! 3. Render each through the shared code-block container
//! 4. Optionally wrap in a page, then print or write the result
//!
use crate::commands::source::SourceArgs;
use crate::common::fs::io;
use crate::copy::SystemClipboard;
use crate::core::config;
use crate::core::error::Result;
use crate::snippet::block::{CodeBlock, Renderer};
use crate::snippet::SnippetRequest;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

mod manifest;

use manifest::Manifest;

const DEFAULT_PAGE_TITLE: &str = "Code Snippets";

/// Arguments for `docsnip render`.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Title bar text shown above the code.
    #[arg(short, long)]
    title: Option<String>,

    /// Never show line numbers (single-line snippets never have them anyway).
    #[arg(long)]
    no_line_numbers: bool,

    /// Render every `[[snippet]]` of a TOML manifest instead of a single snippet.
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with_all = ["code", "file", "language", "title", "no_line_numbers"]
    )]
    manifest: Option<PathBuf>,

    /// Wrap the output in a standalone HTML page.
    #[arg(long)]
    page: bool,

    /// Title of the standalone page (defaults to the manifest title).
    #[arg(long, requires = "page")]
    page_title: Option<String>,

    /// Write the HTML to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

pub async fn handle_render(args: RenderArgs) -> Result<()> {
    info!("Handling render command with args: {:?}", args);
    let cfg = config::load_config()?;
    let renderer = Renderer::from_config(&cfg)?;

    let (requests, manifest_title) = match &args.manifest {
        Some(path) => {
            let manifest = Manifest::load(path)?;
            let title = manifest.title.clone();
            (manifest.into_requests(cfg.render.show_line_numbers), title)
        }
        None => (vec![single_request(&args, cfg.render.show_line_numbers)?], None),
    };

    let blocks = render_blocks(&renderer, requests)?;
    let html = if args.page {
        let title = args
            .page_title
            .as_deref()
            .or(manifest_title.as_deref())
            .unwrap_or(DEFAULT_PAGE_TITLE);
        renderer.render_page(title, &blocks)?
    } else {
        blocks.join("\n")
    };

    match &args.output {
        Some(path) => {
            io::write_string_to_file(path, &html)?;
            println!("Rendered {} snippet(s) to {}", blocks.len(), path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn single_request(args: &RenderArgs, default_line_numbers: bool) -> Result<SnippetRequest> {
    let mut request = args.source.load()?;
    request.show_line_numbers = default_line_numbers && !args.no_line_numbers;
    request.title = args.title.clone();
    Ok(request)
}

/// Mounts each request as a code block and renders it in its initial state.
fn render_blocks(renderer: &Renderer, requests: Vec<SnippetRequest>) -> Result<Vec<String>> {
    let clipboard = Arc::new(SystemClipboard);
    requests
        .into_iter()
        .map(|request| {
            let block = CodeBlock::new(request, clipboard.clone());
            debug!(
                "Rendering {} block with strategy {}",
                block.request().language,
                block.strategy()
            );
            let html = block.render(renderer);
            block.dispose();
            html
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn parse(args: &[&str]) -> RenderArgs {
        RenderArgs::try_parse_from(std::iter::once("render").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_single_request_applies_flags() -> Result<()> {
        let args = parse(&["-l", "go", "-c", "a\nb", "-t", "main.go", "--no-line-numbers"]);
        let request = single_request(&args, true)?;
        assert_eq!(request.title.as_deref(), Some("main.go"));
        assert!(!request.show_line_numbers);

        let args = parse(&["-l", "go", "-c", "a\nb"]);
        assert!(single_request(&args, true)?.show_line_numbers);
        assert!(!single_request(&args, false)?.show_line_numbers);
        Ok(())
    }

    #[test]
    fn test_manifest_conflicts_with_inline_code() {
        let result = RenderArgs::try_parse_from(["render", "-m", "page.toml", "-c", "ls"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_title_requires_page() {
        let result = RenderArgs::try_parse_from(["render", "-c", "ls", "-l", "bash", "--page-title", "X"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_blocks_in_order() -> Result<()> {
        let renderer = Renderer::from_config(&Config::default())?;
        let blocks = render_blocks(
            &renderer,
            vec![
                SnippetRequest::new("ls", "bash"),
                SnippetRequest::new("x := 1", "go"),
            ],
        )?;
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("data-strategy=\"single-line-shell\""));
        assert!(blocks[1].contains("data-strategy=\"single-line-literal\""));
        Ok(())
    }
}
