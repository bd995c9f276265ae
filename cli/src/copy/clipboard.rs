//! # Clipboard Writers
//!
//! File: cli/src/copy/clipboard.rs
//!
//! The copy controller writes through the `ClipboardWriter` trait. The system
//! implementation uses `arboard`, whose calls block, so the write runs on
//! tokio's blocking pool.
//!
use crate::core::error::ClipboardError;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Future returned by `ClipboardWriter::write_text`.
pub type WriteFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<(), ClipboardError>> + Send + 'a>>;

/// Destination for copied text.
pub trait ClipboardWriter: Send + Sync + 'static {
    fn write_text(&self, text: String) -> WriteFuture<'_>;
}

/// The platform clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: String) -> WriteFuture<'_> {
        Box::pin(async move {
            tokio::task::spawn_blocking(move || write_blocking(text))
                .await
                .map_err(|e| ClipboardError::Unavailable(format!("clipboard task failed: {}", e)))?
        })
    }
}

fn write_blocking(text: String) -> std::result::Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| {
        ClipboardError::Unavailable(format!("Failed to open clipboard: {}", e))
    })?;
    let len = text.len();
    clipboard.set_text(text).map_err(|e| {
        let message = e.to_string();
        match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(message),
            _ => ClipboardError::Denied(message),
        }
    })?;
    debug!("Wrote {} bytes to the system clipboard", len);
    Ok(())
}
