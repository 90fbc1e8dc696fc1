//! Terminal UI for the tree table: icons, capability detection and the
//! interactive browser widget.

pub mod terminal;
pub mod theme;
pub mod widgets;
