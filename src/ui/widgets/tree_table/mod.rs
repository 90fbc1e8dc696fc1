//! Tree Table Widget
//!
//! Terminal front end for the tree cascade engine.
//!
//! # Module Structure
//!
//! - `menu` - TreeBrowser cursor state and action handling
//! - `render` - Row, status bar and help bar rendering
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{TreeAction, TreeBrowser};
pub use render::{render_help_bar, render_row, render_status_bar, render_table, Cursor, RowStyle};
