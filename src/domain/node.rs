//! Node records and per-node value types.
//!
//! A `NodeRecord` is what the host hands over on every (re)load. Tree shape
//! (children, depth) is never stored on the record; the index derives it.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node identifier, unique within one load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn default_true() -> bool {
    true
}

/// One row of host data.
///
/// JSON field names follow the console's entity records (`parentId`,
/// `type`, `rbacCUD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: NodeId,

    /// `None` marks a top-level node
    #[serde(default)]
    pub parent_id: Option<NodeId>,

    /// Entity kind; decides whether the row carries a checkbox
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Display label, falls back to the id
    #[serde(default)]
    pub name: Option<String>,

    /// False when the user may not act on the entity (checkbox disabled)
    #[serde(default = "default_true", rename = "rbacCUD")]
    pub rbac_cud: bool,
}

impl NodeRecord {
    /// Create a top-level record
    pub fn root(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            kind: String::new(),
            name: None,
            rbac_cud: true,
        }
    }

    /// Create a record under `parent`
    pub fn child(id: impl Into<NodeId>, parent: impl Into<NodeId>) -> Self {
        Self {
            parent_id: Some(parent.into()),
            ..Self::root(id)
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the record as access-restricted
    pub fn restricted(mut self) -> Self {
        self.rbac_cud = false;
        self
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Tri-state checkbox value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Children disagree
    Mixed,
}

impl CheckState {
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Mixed boxes render ticked (with the mixed glyph), like the browser widget.
    pub fn is_ticked(self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }

    /// Aggregate child states into a parent state.
    ///
    /// Returns `None` for an empty input.
    pub fn aggregate<I>(states: I) -> Option<CheckState>
    where
        I: IntoIterator<Item = CheckState>,
    {
        let mut any = false;
        let mut all_checked = true;
        let mut all_unchecked = true;
        for state in states {
            any = true;
            all_checked &= state == CheckState::Checked;
            all_unchecked &= state == CheckState::Unchecked;
        }

        if !any {
            None
        } else if all_checked {
            Some(CheckState::Checked)
        } else if all_unchecked {
            Some(CheckState::Unchecked)
        } else {
            Some(CheckState::Mixed)
        }
    }
}

/// Toggler control shown next to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TogglerState {
    /// Leaf row, nothing to toggle
    None,
    Expanded,
    Collapsed,
}

/// Checkbox carried by a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkbox {
    pub state: CheckState,
    pub enabled: bool,
}
