//! # DocSnip Copy Feedback
//!
//! File: cli/src/copy/mod.rs
//!
//! ## Overview
//!
//! Drives the "copy to clipboard" button of a code block. The button shows one
//! of two states: `Idle` ("Copy") or `Copied` ("Copied!"). A successful write
//! flips the state to `Copied`, and a one-shot timer flips it back 3000 ms later.
//! A failed write is logged and changes nothing.
//!
//! ## Architecture
//!
//! `CopyFeedback` is the ownership unit for one button. It holds:
//! - the clipboard writer,
//! - the state, published on a `tokio::sync::watch` channel,
//! - a generation counter bumped by every successful copy,
//! - the handle of the pending reset timer,
//! - a disposed flag set on teardown.
//!
//! Repeated copies restart the window: a new success aborts the previous
//! timer and schedules a fresh one, and a timer only resets the state if its
//! generation is still current. `Copied` therefore stays visible until
//! `RESET_DELAY` after the *last* successful copy.
//!
//! After `dispose()` (or drop) no timer or in-flight write touches the state.
//!
//! ## Examples
//!
//! ```rust
//! let feedback = CopyFeedback::new(Arc::new(SystemClipboard));
//! let mut state = feedback.subscribe();
//! feedback.request_copy("go install ./cmd/godeps");
//! state.changed().await?; // Copied
//! state.changed().await?; // Idle again, 3 s later
//! ```
//!
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub mod clipboard;

pub use clipboard::{ClipboardWriter, SystemClipboard};

/// How long the `Copied` state stays visible after a successful copy.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Visible state of a copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

impl CopyState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy",
            Self::Copied => "Copied!",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Idle => "copy",
            Self::Copied => "check",
        }
    }
}

/// Copy-button controller for one rendered code block.
pub struct CopyFeedback {
    shared: Arc<Shared>,
}

struct Shared {
    clipboard: Arc<dyn ClipboardWriter>,
    state: watch::Sender<CopyState>,
    generation: AtomicU64,
    disposed: AtomicBool,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
}

impl CopyFeedback {
    pub fn new(clipboard: Arc<dyn ClipboardWriter>) -> Self {
        let (state, _) = watch::channel(CopyState::Idle);
        Self {
            shared: Arc::new(Shared {
                clipboard,
                state,
                generation: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
                pending_reset: Mutex::new(None),
            }),
        }
    }

    pub fn state(&self) -> CopyState {
        *self.shared.state.borrow()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<CopyState> {
        self.shared.state.subscribe()
    }

    /// Starts an asynchronous write of `code` and returns immediately.
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// completes once the write has been attempted; callers are free to drop it.
    pub fn request_copy(&self, code: impl Into<String>) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let code = code.into();
        tokio::spawn(shared.copy(code))
    }

    /// Detaches the controller from its view. Pending timers are cancelled and
    /// later completions are ignored. Idempotent.
    pub fn dispose(&self) {
        self.shared.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.disposed.load(Ordering::SeqCst)
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.shared.dispose();
    }
}

impl Shared {
    async fn copy(self: Arc<Self>, code: String) {
        let len = code.len();
        match self.clipboard.write_text(code).await {
            Ok(()) => self.mark_copied(),
            Err(e) => warn!(
                "Copy of {} bytes failed, button stays {:?}: {}",
                len,
                *self.state.borrow(),
                e
            ),
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // The guarded handle has no invariant a panic could break.
        self.pending_reset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn mark_copied(self: &Arc<Self>) {
        let mut pending = self.lock_pending();
        if self.disposed.load(Ordering::SeqCst) {
            debug!("Copy completed after teardown; ignoring");
            return;
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(CopyState::Copied);
        info!("Copied to clipboard (generation {})", generation);

        let shared = Arc::clone(self);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(RESET_DELAY).await;
            shared.reset(generation);
        });
        if let Some(previous) = pending.replace(timer) {
            previous.abort();
        }
    }

    fn reset(&self, generation: u64) {
        // Serialized with `mark_copied`: a newer copy cannot slip in between
        // the generation check and the reset.
        let _pending = self.lock_pending();
        if self.disposed.load(Ordering::SeqCst) {
            return;
        }
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Reset timer {} superseded by a later copy", generation);
            return;
        }
        self.state.send_replace(CopyState::Idle);
        debug!("Copy feedback reset to idle");
    }

    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(timer) = self.lock_pending().take() {
            timer.abort();
        }
        debug!("Copy feedback disposed");
    }
}
