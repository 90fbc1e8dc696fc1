//! treecascade - tri-state tree table engine
//!
//! Maintains expand/collapse visibility and cascading tri-state checkbox
//! state for a forest of host-supplied node records, and reports each
//! change as a UI-neutral render intent.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::engine::{RowView, TreeCascade};
pub use domain::event::Event;
pub use domain::index::{compute_children, compute_depth, TreeIndex};
pub use domain::node::{CheckState, Checkbox, NodeId, NodeRecord, TogglerState};
pub use domain::ports::{NoopRenderSink, RecordingRenderSink, RenderIntent, RenderSink};
pub use error::{CascadeError, CascadeResult};
pub use infrastructure::{load_records, parse_records, JsonRenderSink};
