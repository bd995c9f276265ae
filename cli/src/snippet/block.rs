//! # Code Block Container
//!
//! File: cli/src/snippet/block.rs
//!
//! ## Overview
//!
//! `Renderer` turns a `SnippetRequest` into HTML: it classifies the snippet,
//! builds the body with the matching strategy, and wraps it in the shared
//! `code_block.html` container.
//!
//! `CodeBlock` is one mounted block: a request plus its own `CopyFeedback`.
//! The copy button is always bound to `request.code`, never to rendered markup.
//!
//! Body shapes per strategy:
//! - single-line shell: `$` prompt + highlighted command
//! - multi-line shell: see `split::render_script`
//! - single-line literal: escaped code, no highlighting
//! - delegated: whatever the `HighlightDelegate` produced
//!
use super::delegate::{render_delegated, HighlightDelegate, SyntectDelegate};
use super::highlight::highlight;
use super::split::render_script;
use super::{escape_text, RenderStrategy, SnippetRequest};
use crate::copy::{ClipboardWriter, CopyFeedback, CopyState};
use crate::core::config::{Config, Palette};
use crate::core::error::Result;
use crate::core::templating::{CodeBlockContext, CopyButtonContext, PageContext, Templates};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct Renderer {
    delegate: Box<dyn HighlightDelegate>,
    templates: Templates,
    palette: Palette,
}

impl Renderer {
    pub fn new(delegate: Box<dyn HighlightDelegate>, palette: Palette) -> Result<Self> {
        Ok(Self {
            delegate,
            templates: Templates::new()?,
            palette,
        })
    }

    /// Renderer using syntect with the configured theme and palette.
    pub fn from_config(config: &Config) -> Result<Self> {
        let delegate = SyntectDelegate::new(&config.render.theme)?;
        Self::new(Box::new(delegate), config.palette.clone())
    }

    /// Body markup for a snippet, without the container.
    pub fn render_body(&self, request: &SnippetRequest) -> (RenderStrategy, String) {
        let strategy = request.strategy();
        debug!(
            "Rendering {} snippet ({} bytes) as {}",
            request.language,
            request.code.len(),
            strategy
        );
        let body = match strategy {
            RenderStrategy::SingleLineShell => format!(
                "<pre class=\"shell\"><code><span class=\"prompt\">$</span> {}</code></pre>",
                highlight(&request.code)
            ),
            RenderStrategy::MultiLineShell => render_script(&request.code),
            RenderStrategy::SingleLineLiteral => format!(
                "<pre class=\"literal\"><code>{}</code></pre>",
                escape_text(&request.code)
            ),
            RenderStrategy::Delegated => {
                render_delegated(
                    self.delegate.as_ref(),
                    &request.code,
                    &request.language,
                    request.show_line_numbers,
                )
                .markup
            }
        };
        (strategy, body)
    }

    /// Full container markup with the copy button drawn for `state`.
    pub fn render_block(&self, request: &SnippetRequest, state: CopyState) -> Result<String> {
        let (strategy, body) = self.render_body(request);
        let title = request.title.as_deref().filter(|_| request.has_title());
        self.templates.render_code_block(&CodeBlockContext {
            strategy,
            language: &request.language,
            title,
            code: &request.code,
            body: &body,
            copy: CopyButtonContext {
                state,
                label: state.label(),
                icon: state.icon(),
            },
        })
    }

    /// Standalone HTML document around already rendered blocks.
    pub fn render_page(&self, title: &str, blocks: &[String]) -> Result<String> {
        self.templates.render_page(&PageContext {
            title,
            version: env!("CARGO_PKG_VERSION"),
            palette: &self.palette,
            blocks,
        })
    }
}

/// One mounted code block with its own copy button state.
pub struct CodeBlock {
    request: SnippetRequest,
    copy: CopyFeedback,
}

impl CodeBlock {
    pub fn new(request: SnippetRequest, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            request,
            copy: CopyFeedback::new(clipboard),
        }
    }

    pub fn request(&self) -> &SnippetRequest {
        &self.request
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.request.strategy()
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CopyState> {
        self.copy.subscribe()
    }

    /// Copies the original code text. Needs a tokio runtime.
    pub fn request_copy(&self) -> JoinHandle<()> {
        self.copy.request_copy(self.request.code.clone())
    }

    pub fn render(&self, renderer: &Renderer) -> Result<String> {
        renderer.render_block(&self.request, self.copy.state())
    }

    /// Tears down the copy button; pending feedback updates are dropped.
    pub fn dispose(&self) {
        if self.copy.is_disposed() {
            return;
        }
        debug!("Disposing {} code block", self.request.language);
        self.copy.dispose();
    }
}
