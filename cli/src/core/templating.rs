//! # DocSnip Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! HTML output is produced with the Tera templating engine. Two templates are
//! compiled into the binary:
//!
//! - `code_block.html`: the shared container around every snippet body (title
//!   bar, copy button, raw code for the button, the body markup itself)
//! - `page.html`: a standalone document with the stylesheet for the shell
//!   emphasis classes, wrapping any number of rendered blocks
//!
//! ## Architecture
//!
//! Both templates end in `.html`, so Tera auto-escapes every interpolated value.
//! Body markup and already-rendered blocks are inserted with the `safe` filter;
//! they were escaped by the renderer that produced them.
//!
//! ## Examples
//!
//! ```rust
//! let templates = Templates::new()?;
//! let html = templates.render_code_block(&CodeBlockContext {
//!     strategy: RenderStrategy::SingleLineShell,
//!     language: "bash",
//!     title: Some("Install"),
//!     code: "go install ./cmd/godeps",
//!     body: &body,
//!     copy: CopyButtonContext { state: CopyState::Idle, label: "Copy", icon: "copy" },
//! })?;
//! ```
//!
use crate::copy::CopyState;
use crate::core::config::Palette;
use crate::core::error::{DocsnipError, Result};
use crate::snippet::RenderStrategy;
use anyhow::anyhow;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

const CODE_BLOCK_TEMPLATE: &str = include_str!("../../templates/code_block.html");
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Values for `code_block.html`.
#[derive(Serialize, Debug)]
pub struct CodeBlockContext<'a> {
    pub strategy: RenderStrategy,
    pub language: &'a str,
    pub title: Option<&'a str>,
    /// Raw, unhighlighted code; ends up HTML-attribute escaped in `data-code`.
    pub code: &'a str,
    /// Pre-escaped body markup.
    pub body: &'a str,
    pub copy: CopyButtonContext<'a>,
}

#[derive(Serialize, Debug)]
pub struct CopyButtonContext<'a> {
    pub state: CopyState,
    pub label: &'a str,
    pub icon: &'a str,
}

/// Values for `page.html`.
#[derive(Serialize, Debug)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub version: &'a str,
    pub palette: &'a Palette,
    pub blocks: &'a [String],
}

/// The compiled built-in templates.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("code_block.html", CODE_BLOCK_TEMPLATE),
            ("page.html", PAGE_TEMPLATE),
        ])
        .map_err(|e| {
            anyhow!(DocsnipError::Template { source: e })
                .context("Failed to compile built-in templates")
        })?;
        debug!("Compiled built-in templates");
        Ok(Self { tera })
    }

    pub fn render_code_block(&self, context: &CodeBlockContext<'_>) -> Result<String> {
        self.render("code_block.html", context)
    }

    pub fn render_page(&self, context: &PageContext<'_>) -> Result<String> {
        self.render("page.html", context)
    }

    fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        let tera_context = tera::Context::from_serialize(context).map_err(|e| {
            anyhow!(DocsnipError::Template { source: e })
                .context(format!("Failed to build context for template '{}'", name))
        })?;
        self.tera.render(name, &tera_context).map_err(|e| {
            anyhow!(DocsnipError::Template { source: e })
                .context(format!("Tera rendering failed for template '{}'", name))
        })
    }
}
