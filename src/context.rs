//! Per-session generation context.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared, read-mostly state for one analysis session.
///
/// The embedder constructs one context per session and hands every processor a
/// reference. Processors only ever read it; the single writer is the embedder
/// reacting to an editor preference change. Last writer wins.
#[derive(Debug, Default)]
pub struct GenerationContext {
    /// Whether synthesized method bodies are fully elaborated (`true`) or left
    /// as minimal stubs (`false`, the initial state).
    full_body: AtomicBool,
}

impl GenerationContext {
    pub fn new(full_body: bool) -> Self {
        Self {
            full_body: AtomicBool::new(full_body),
        }
    }

    /// Read the full-body toggle. Safe to call concurrently from any number of
    /// processors while the embedder flips it.
    pub fn full_body(&self) -> bool {
        self.full_body.load(Ordering::Relaxed)
    }

    /// Flip the full-body toggle (embedder-side).
    pub fn set_full_body(&self, value: bool) {
        self.full_body.store(value, Ordering::Relaxed);
    }
}
