//! # DocSnip Copy Command
//!
//! File: cli/src/commands/copy.rs
//!
//! ## Overview
//!
//! `docsnip copy` puts a snippet's raw code on the system clipboard and shows
//! the copy button's label as it changes:
//!
//! ```text
//! [copy] Copy
//! [check] Copied!
//! [copy] Copy
//! ```
//!
//! The last line appears three seconds after the copy, unless `--no-wait` is
//! given. When the clipboard cannot be written the failure is logged, the
//! label stays at `Copy`, and the command still succeeds.
//!
use crate::commands::source::SourceArgs;
use crate::copy::{CopyState, SystemClipboard};
use crate::core::error::Result;
use crate::snippet::block::CodeBlock;
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

/// Arguments for `docsnip copy`.
#[derive(Parser, Debug)]
pub struct CopyArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Exit right after the copy instead of waiting for the label to reset.
    #[arg(long)]
    no_wait: bool,
}

pub async fn handle_copy(mut args: CopyArgs) -> Result<()> {
    info!("Handling copy command with args: {:?}", args);
    // The language only matters for rendering; copying works for any tag.
    args.source.language.get_or_insert_with(|| "text".to_string());
    let request = args.source.load()?;

    let block = CodeBlock::new(request, Arc::new(SystemClipboard));
    run_copy(&block, !args.no_wait, print_state).await?;
    block.dispose();
    Ok(())
}

/// Copies the block's code and reports every state the button shows.
async fn run_copy(
    block: &CodeBlock,
    wait: bool,
    mut report: impl FnMut(CopyState),
) -> Result<()> {
    let mut state = block.subscribe();
    report(block.copy_state());

    block
        .request_copy()
        .await
        .context("Clipboard task did not complete")?;

    if !state.has_changed().context("Copy feedback closed unexpectedly")? {
        info!("Clipboard write failed; label unchanged");
        return Ok(());
    }
    report(*state.borrow_and_update());

    if wait {
        state
            .changed()
            .await
            .context("Copy feedback closed before reset")?;
        report(*state.borrow_and_update());
    }
    Ok(())
}

fn print_state(state: CopyState) {
    println!("{}", format_state(state));
}

fn format_state(state: CopyState) -> String {
    format!("[{}] {}", state.icon(), state.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::tests::RecordingClipboard;
    use crate::copy::RESET_DELAY;
    use crate::core::error::ClipboardError;
    use crate::snippet::SnippetRequest;
    use tokio::time::Instant;

    fn block(clipboard: Arc<RecordingClipboard>) -> CodeBlock {
        CodeBlock::new(SnippetRequest::new("npm run build", "bash"), clipboard)
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_copy_reports_full_cycle() -> Result<()> {
        let clipboard = Arc::new(RecordingClipboard::default());
        let block = block(clipboard.clone());
        let mut shown = Vec::new();
        let started = Instant::now();

        run_copy(&block, true, |s| shown.push(format_state(s))).await?;

        assert_eq!(shown, ["[copy] Copy", "[check] Copied!", "[copy] Copy"]);
        assert!(started.elapsed() >= RESET_DELAY);
        assert_eq!(clipboard.writes(), vec!["npm run build".to_string()]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_copy_without_wait_stops_at_copied() -> Result<()> {
        let block = block(Arc::new(RecordingClipboard::default()));
        let mut shown = Vec::new();

        run_copy(&block, false, |s| shown.push(s)).await?;

        assert_eq!(shown, [CopyState::Idle, CopyState::Copied]);
        assert_eq!(block.copy_state(), CopyState::Copied);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_copy_failure_keeps_idle_label() -> Result<()> {
        let block = block(Arc::new(RecordingClipboard::failing(
            ClipboardError::Unavailable("no display".into()),
        )));
        let mut shown = Vec::new();

        run_copy(&block, true, |s| shown.push(s)).await?;

        assert_eq!(shown, [CopyState::Idle]);
        Ok(())
    }

    #[test]
    fn test_format_state() {
        assert_eq!(format_state(CopyState::Idle), "[copy] Copy");
        assert_eq!(format_state(CopyState::Copied), "[check] Copied!");
    }
}
