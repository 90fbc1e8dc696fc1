//! Render Sink Implementations
//!
//! Concrete implementations of RenderSink:
//! - JsonRenderSink: NDJSON output for hosts and automation

mod json;

pub use json::JsonRenderSink;
