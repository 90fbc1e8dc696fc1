//! Error types for treecascade
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::node::NodeId;

/// Result type alias for treecascade operations
pub type CascadeResult<T> = Result<T, CascadeError>;

/// Main error type for treecascade operations
#[derive(Error, Debug)]
pub enum CascadeError {
    /// Two records share the same id
    #[error("duplicate node id '{id}' (records {first} and {second})")]
    DuplicateNode {
        id: NodeId,
        first: usize,
        second: usize,
    },

    /// A record names a parent that is not part of the load
    #[error("node '{id}' references missing parent '{parent}'")]
    MissingParent { id: NodeId, parent: NodeId },

    /// A parent chain loops back on itself
    #[error("parent chain of node '{id}' forms a cycle")]
    ParentCycle { id: NodeId },

    /// Operation addressed an id that is not loaded
    #[error("unknown node '{id}'")]
    UnknownNode { id: NodeId },

    /// Node has no checkbox, or its checkbox is disabled
    #[error("node '{id}' has no enabled checkbox")]
    NotCheckable { id: NodeId },

    /// Configuration failed validation
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Host event string could not be parsed
    #[error("invalid event '{input}': expected toggle:<id>, check:<id>, uncheck:<id>, expand-all or collapse-all")]
    InvalidEvent { input: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
