//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Hosts provide concrete implementations.

pub mod render;

pub use render::{NoopRenderSink, RecordingRenderSink, RenderIntent, RenderSink};
