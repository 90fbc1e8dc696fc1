//! Node Record Loading
//!
//! Reads host-supplied node records from JSON. Either a bare array of
//! records or an object with a `nodes` array is accepted.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::node::NodeRecord;
use crate::error::CascadeResult;

#[derive(Deserialize)]
struct WrappedDocument {
    nodes: Vec<NodeRecord>,
}

/// Parse node records from a JSON string
pub fn parse_records(content: &str) -> CascadeResult<Vec<NodeRecord>> {
    // The first token picks the shape, so errors keep their line and column
    let records = if content.trim_start().starts_with('[') {
        serde_json::from_str(content)?
    } else {
        serde_json::from_str::<WrappedDocument>(content)?.nodes
    };
    Ok(records)
}

/// Load node records from a JSON file; `-` reads stdin
pub fn load_records(path: &Path) -> CascadeResult<Vec<NodeRecord>> {
    let content = if path.as_os_str() == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(path)?
    };
    let records = parse_records(&content)?;
    debug!(path = %path.display(), count = records.len(), "read node records");
    Ok(records)
}

fn read_stdin() -> CascadeResult<String> {
    use std::io::Read;

    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}
