//! Text rendering for the tree table.
//!
//! Turns engine rows into terminal lines: cursor marker, indentation,
//! toggler, checkbox and label.

use crate::domain::engine::{RowView, TreeCascade};
use crate::domain::node::CheckState;
use crate::domain::ports::render::RenderSink;
use crate::ui::theme::Glyphs;

/// How rows are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub glyphs: Glyphs,
    /// Spaces per depth level
    pub indent: usize,
}

impl RowStyle {
    pub fn new(unicode: bool, indent: usize) -> Self {
        Self {
            glyphs: Glyphs::new(unicode),
            indent,
        }
    }
}

/// Cursor column for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Plain listing, no cursor column
    Hidden,
    Active,
    Inactive,
}

/// Render a single row to a string
pub fn render_row(row: &RowView<'_>, style: &RowStyle, cursor: Cursor) -> String {
    let glyphs = &style.glyphs;
    let marker = match cursor {
        Cursor::Hidden => String::new(),
        Cursor::Active => format!("{} ", glyphs.pointer()),
        Cursor::Inactive => " ".repeat(glyphs.pointer().chars().count() + 1),
    };
    let indent = " ".repeat(style.indent * row.depth);
    let checkbox = match row.checkbox {
        Some(checkbox) => glyphs.checkbox(checkbox).to_string(),
        None => " ".repeat(glyphs.check_state(CheckState::Unchecked).chars().count()),
    };

    format!(
        "{}{}{} {} {}",
        marker,
        indent,
        glyphs.toggler(row.toggler),
        checkbox,
        row.label
    )
}

/// Render every visible row, one per line
pub fn render_table<S: RenderSink>(engine: &TreeCascade<S>, style: &RowStyle) -> String {
    let mut out = String::new();
    for row in engine.visible_rows() {
        out.push_str(&render_row(&row, style, Cursor::Hidden));
        out.push('\n');
    }
    out
}

/// Render the status bar showing checkbox counts
pub fn render_status_bar<S: RenderSink>(engine: &TreeCascade<S>, glyphs: &Glyphs) -> String {
    let rows = engine.rows();
    let checkable = rows.iter().filter(|r| r.checkbox.is_some()).count();
    let ticked = engine.checked_nodes(&[]).len();
    let visible = rows.iter().filter(|r| r.visible).count();

    format!(
        "Checked: {}/{} nodes    Visible: {}/{}\n\n{} = checked    {} = mixed    {} = unchecked",
        ticked,
        checkable,
        visible,
        rows.len(),
        glyphs.check_state(CheckState::Checked),
        glyphs.check_state(CheckState::Mixed),
        glyphs.check_state(CheckState::Unchecked),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(glyphs: &Glyphs) -> String {
    format!(
        "[a] Expand all    [n] Collapse all    [Enter] Confirm    [q] Quit\n\
         (Use {} to navigate, Space to check, {} to expand/collapse)",
        glyphs.up_down(),
        glyphs.right_left(),
    )
}
