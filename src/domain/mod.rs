//! Domain Layer
//!
//! The core of treecascade: tree bookkeeping and the cascade engine, with
//! no I/O and no UI dependencies.
//!
//! ## Structure
//!
//! - `node` - Node records and per-row value types (CheckState, TogglerState)
//! - `index` - Validated adjacency index rebuilt on every load
//! - `engine` - Expand/collapse and tri-state checkbox state machine
//! - `event` - Host events the engine can replay
//! - `ports/` - Interface definitions for the host UI
//!
//! ## Design Principles
//!
//! 1. **No I/O** - rendering goes through the `RenderSink` port
//! 2. **Explicit state** - the index is built per load and owned by the engine
//! 3. **Fail fast** - malformed input is rejected at load, never traversed

pub mod engine;
pub mod event;
pub mod index;
pub mod node;
pub mod ports;
