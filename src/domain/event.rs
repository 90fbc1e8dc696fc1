//! Host events
//!
//! One `Event` per user action in the host UI. The text form is what the
//! CLI accepts on its command line.

use std::fmt;
use std::str::FromStr;

use crate::domain::node::NodeId;
use crate::error::CascadeError;

/// A discrete user action forwarded by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on a row's toggler
    Toggle(NodeId),
    /// Click that ticks a checkbox
    Check(NodeId),
    /// Click that clears a checkbox
    Uncheck(NodeId),
    ExpandAll,
    CollapseAll,
}

impl FromStr for Event {
    type Err = CascadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CascadeError::InvalidEvent {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        match trimmed {
            "expand-all" => return Ok(Event::ExpandAll),
            "collapse-all" => return Ok(Event::CollapseAll),
            _ => {}
        }

        let (verb, id) = trimmed.split_once(':').ok_or_else(invalid)?;
        if id.is_empty() {
            return Err(invalid());
        }
        let id = NodeId::from(id);
        match verb {
            "toggle" => Ok(Event::Toggle(id)),
            "check" => Ok(Event::Check(id)),
            "uncheck" => Ok(Event::Uncheck(id)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Toggle(id) => write!(f, "toggle:{}", id),
            Event::Check(id) => write!(f, "check:{}", id),
            Event::Uncheck(id) => write!(f, "uncheck:{}", id),
            Event::ExpandAll => f.write_str("expand-all"),
            Event::CollapseAll => f.write_str("collapse-all"),
        }
    }
}
