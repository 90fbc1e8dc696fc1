//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Render sink implementations (NDJSON)
//! - `records/` - Node record loading from JSON

pub mod events;
pub mod records;

// Re-export for convenience
pub use events::JsonRenderSink;
pub use records::{load_records, parse_records};
