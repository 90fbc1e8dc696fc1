//! Browser state and action handling.
//!
//! Wraps a [`TreeCascade`] with a cursor over its visible rows and maps
//! keyboard-level actions onto engine operations.

use crate::domain::engine::TreeCascade;
use crate::domain::node::{CheckState, NodeId};
use crate::domain::ports::render::RenderSink;
use crate::error::CascadeResult;
use crate::ui::theme::Glyphs;

use super::render::{render_help_bar, render_row, render_status_bar, Cursor, RowStyle};

/// Tree browser action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Flip the checkbox under the cursor
    Check,
    /// Expand node
    Expand,
    /// Collapse node
    Collapse,
    ExpandAll,
    CollapseAll,
    /// Confirm and return the checked nodes
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive view over a tree cascade engine
pub struct TreeBrowser<S: RenderSink> {
    engine: TreeCascade<S>,
    /// Position in the visible rows
    cursor: usize,
}

impl<S: RenderSink> TreeBrowser<S> {
    pub fn new(engine: TreeCascade<S>) -> Self {
        Self { engine, cursor: 0 }
    }

    pub fn engine(&self) -> &TreeCascade<S> {
        &self.engine
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Id of the row under the cursor
    pub fn current(&self) -> Option<NodeId> {
        self.engine
            .visible_rows()
            .get(self.cursor)
            .map(|row| row.id.clone())
    }

    /// Handle a browser action; returns true when the session should end.
    ///
    /// Checking a row without an enabled checkbox does nothing.
    pub fn handle_action(&mut self, action: TreeAction) -> CascadeResult<bool> {
        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.engine.visible_rows().len() {
                    self.cursor += 1;
                }
            }
            TreeAction::Check => {
                let Some(row) = self.engine.visible_rows().get(self.cursor).cloned() else {
                    return Ok(false);
                };
                if let Some(checkbox) = row.checkbox.filter(|b| b.enabled) {
                    // Mixed boxes tick on click, like a native indeterminate checkbox
                    let checked = checkbox.state != CheckState::Checked;
                    let id = row.id.clone();
                    self.engine.set_checked(id.as_str(), checked)?;
                }
            }
            TreeAction::Expand => {
                if let Some(id) = self.current() {
                    self.engine.expand(id.as_str())?;
                }
            }
            TreeAction::Collapse => {
                if let Some(id) = self.current() {
                    self.engine.collapse(id.as_str())?;
                }
            }
            TreeAction::ExpandAll => {
                let current = self.current();
                self.engine.expand_all();
                self.follow(current);
            }
            TreeAction::CollapseAll => {
                let current = self.current();
                self.engine.collapse_all();
                self.follow(current);
            }
            TreeAction::Confirm | TreeAction::Quit => return Ok(true),
        }
        self.clamp();
        Ok(false)
    }

    /// Keep the cursor on `id` if it is still visible
    fn follow(&mut self, id: Option<NodeId>) {
        if let Some(id) = id {
            if let Some(pos) = self
                .engine
                .visible_rows()
                .iter()
                .position(|row| *row.id == id)
            {
                self.cursor = pos;
            }
        }
    }

    fn clamp(&mut self) {
        let len = self.engine.visible_rows().len();
        if len > 0 && self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Ids of ticked rows
    pub fn checked_ids(&self) -> Vec<NodeId> {
        self.engine.checked_nodes(&[]).into_iter().cloned().collect()
    }

    /// Render the visible rows with the cursor column
    pub fn render(&self, style: &RowStyle) -> String {
        let mut out = String::new();
        for (i, row) in self.engine.visible_rows().iter().enumerate() {
            let cursor = if i == self.cursor {
                Cursor::Active
            } else {
                Cursor::Inactive
            };
            out.push_str(&render_row(row, style, cursor));
            out.push('\n');
        }
        out
    }

    pub fn render_status_bar(&self, glyphs: &Glyphs) -> String {
        render_status_bar(&self.engine, glyphs)
    }

    pub fn render_help_bar(&self, glyphs: &Glyphs) -> String {
        render_help_bar(glyphs)
    }
}
