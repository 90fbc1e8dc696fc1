//! Render Port
//!
//! The engine never touches a UI. It reports intent ("show this row",
//! "tick this box") through a `RenderSink`, and the host decides how to
//! draw it.

use std::sync::Mutex;

use crate::domain::node::{CheckState, NodeId, TogglerState};

/// UI-neutral instruction emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderIntent {
    /// Show or hide a row
    RowVisibility { id: NodeId, visible: bool },

    /// Redraw a row's toggler control
    Toggler { id: NodeId, state: TogglerState },

    /// Redraw a row's tri-state checkbox
    Checkbox { id: NodeId, state: CheckState },
}

impl RenderIntent {
    pub fn id(&self) -> &NodeId {
        match self {
            RenderIntent::RowVisibility { id, .. }
            | RenderIntent::Toggler { id, .. }
            | RenderIntent::Checkbox { id, .. } => id,
        }
    }
}

/// Trait for receiving render intents
///
/// Implementations can be:
/// - NoopRenderSink: headless operation
/// - RecordingRenderSink: in-memory log for tests and replay
/// - JsonRenderSink: NDJSON stream for scripting
pub trait RenderSink: Send + Sync {
    /// Handle a render intent
    fn on_intent(&self, intent: RenderIntent);
}

/// No-op render sink for headless operation
pub struct NoopRenderSink;

impl RenderSink for NoopRenderSink {
    fn on_intent(&self, _intent: RenderIntent) {}
}

/// Render sink that keeps every intent in memory
#[derive(Default)]
pub struct RecordingRenderSink {
    intents: Mutex<Vec<RenderIntent>>,
}

impl RecordingRenderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intents received so far
    pub fn intents(&self) -> Vec<RenderIntent> {
        self.intents.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Drain intents received so far
    pub fn take(&self) -> Vec<RenderIntent> {
        self.intents
            .lock()
            .map(|mut g| std::mem::take(&mut *g))
            .unwrap_or_default()
    }
}

impl RenderSink for RecordingRenderSink {
    fn on_intent(&self, intent: RenderIntent) {
        if let Ok(mut intents) = self.intents.lock() {
            intents.push(intent);
        }
    }
}

impl<T: RenderSink + ?Sized> RenderSink for &T {
    fn on_intent(&self, intent: RenderIntent) {
        (**self).on_intent(intent)
    }
}

impl<T: RenderSink + ?Sized> RenderSink for Box<T> {
    fn on_intent(&self, intent: RenderIntent) {
        (**self).on_intent(intent)
    }
}
