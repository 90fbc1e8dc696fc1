//! Tree Cascade Engine
//!
//! Keeps per-row state for one load of node records and implements the two
//! interactions a tree table offers:
//!
//! - **Expand/collapse**: collapsing hides every transitive descendant while
//!   leaving their own toggler state alone; expanding reveals descendants
//!   only through togglers that are themselves expanded.
//! - **Tri-state checkboxes**: ticking a box cascades down to every eligible
//!   descendant, then each ancestor is recomputed from its children.
//!
//! The engine reports each visible change to a [`RenderSink`] and never
//! performs I/O of its own.

use tracing::{debug, trace};

use crate::config::Config;
use crate::domain::event::Event;
use crate::domain::index::TreeIndex;
use crate::domain::node::{CheckState, Checkbox, NodeId, NodeRecord, TogglerState};
use crate::domain::ports::render::{NoopRenderSink, RenderIntent, RenderSink};
use crate::error::{CascadeError, CascadeResult};

#[derive(Debug, Clone, Copy)]
struct RowState {
    expanded: bool,
    visible: bool,
    checkbox: Option<Checkbox>,
}

/// Snapshot of one row, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub id: &'a NodeId,
    pub label: &'a str,
    pub kind: &'a str,
    pub depth: usize,
    pub toggler: TogglerState,
    pub checkbox: Option<Checkbox>,
    pub visible: bool,
}

/// In-memory tree table state machine
pub struct TreeCascade<S: RenderSink = NoopRenderSink> {
    index: TreeIndex,
    rows: Vec<RowState>,
    config: Config,
    sink: S,
}

impl TreeCascade<NoopRenderSink> {
    /// Engine without a render target
    pub fn headless(records: Vec<NodeRecord>, config: Config) -> CascadeResult<Self> {
        Self::new(records, config, NoopRenderSink)
    }
}

impl<S: RenderSink> TreeCascade<S> {
    /// Validate `config`, index `records` and emit the initial row state.
    pub fn new(records: Vec<NodeRecord>, config: Config, sink: S) -> CascadeResult<Self> {
        config.validate()?;
        let index = TreeIndex::build(records)?;
        let mut engine = Self {
            rows: Vec::new(),
            index,
            config,
            sink,
        };
        engine.reset_rows();
        Ok(engine)
    }

    /// Replace the whole node set.
    ///
    /// Prior state is kept if the new records fail validation.
    pub fn reload(&mut self, records: Vec<NodeRecord>) -> CascadeResult<()> {
        self.index = TreeIndex::build(records)?;
        self.reset_rows();
        Ok(())
    }

    fn reset_rows(&mut self) {
        let config = &self.config;
        self.rows = self
            .index
            .records()
            .iter()
            .map(|record| RowState {
                expanded: true,
                visible: true,
                checkbox: config.is_checkable(&record.kind).then_some(Checkbox {
                    state: CheckState::Unchecked,
                    enabled: record.rbac_cud,
                }),
            })
            .collect();

        debug!(
            nodes = self.index.len(),
            roots = self.index.roots().len(),
            checkable = self.rows.iter().filter(|r| r.checkbox.is_some()).count(),
            "loaded tree"
        );

        for pos in 0..self.rows.len() {
            self.emit_row(pos);
        }

        if self.config.tree.initially_collapsed {
            self.collapse_all();
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ------------------------------------------------------------------
    // Expand / collapse
    // ------------------------------------------------------------------

    /// Flip the node's toggler and hide or reveal its descendants.
    ///
    /// Leaves have no toggler; toggling one is a no-op returning
    /// [`TogglerState::None`].
    pub fn toggle_expand(&mut self, id: &str) -> CascadeResult<TogglerState> {
        let pos = self.index.require(id)?;
        if !self.index.has_children(pos) {
            return Ok(TogglerState::None);
        }
        let expanded = !self.rows[pos].expanded;
        self.set_expanded(pos, expanded);
        Ok(self.toggler_at(pos))
    }

    /// Expand the node if it is collapsed
    pub fn expand(&mut self, id: &str) -> CascadeResult<TogglerState> {
        self.ensure_expanded(id, true)
    }

    /// Collapse the node if it is expanded
    pub fn collapse(&mut self, id: &str) -> CascadeResult<TogglerState> {
        self.ensure_expanded(id, false)
    }

    fn ensure_expanded(&mut self, id: &str, expanded: bool) -> CascadeResult<TogglerState> {
        let pos = self.index.require(id)?;
        if self.index.has_children(pos) && self.rows[pos].expanded != expanded {
            self.set_expanded(pos, expanded);
        }
        Ok(self.toggler_at(pos))
    }

    fn set_expanded(&mut self, pos: usize, expanded: bool) {
        debug!(id = %self.index.id(pos), expanded, "toggle");
        self.rows[pos].expanded = expanded;
        self.emit(RenderIntent::Toggler {
            id: self.index.id(pos).clone(),
            state: self.toggler_at(pos),
        });

        if expanded {
            self.reveal_descendants(pos);
        } else {
            for desc in self.index.descendants(pos) {
                self.set_visible(desc, false);
            }
        }
    }

    /// Reveal descendants level by level, descending only through
    /// expanded togglers. A hidden node keeps its subtree hidden.
    fn reveal_descendants(&mut self, pos: usize) {
        if !self.rows[pos].visible {
            trace!(id = %self.index.id(pos), "expanded a hidden row, subtree stays hidden");
            return;
        }

        let mut pending = vec![pos];
        while let Some(parent) = pending.pop() {
            let children = self.index.children(parent).to_vec();
            for child in children {
                self.set_visible(child, true);
                if self.index.has_children(child) && self.rows[child].expanded {
                    pending.push(child);
                }
            }
        }
    }

    /// Expand every toggler and show every row
    pub fn expand_all(&mut self) {
        debug!("expand all");
        for pos in 0..self.rows.len() {
            if self.index.has_children(pos) && !self.rows[pos].expanded {
                self.rows[pos].expanded = true;
                self.emit_toggler(pos);
            }
            self.set_visible(pos, true);
        }
    }

    /// Collapse every toggler and show only top-level rows.
    ///
    /// A forest with a single root keeps that root open so its direct
    /// children stay in view.
    pub fn collapse_all(&mut self) {
        debug!("collapse all");
        for pos in 0..self.rows.len() {
            if self.index.has_children(pos) && self.rows[pos].expanded {
                self.rows[pos].expanded = false;
                self.emit_toggler(pos);
            }
            self.set_visible(pos, self.index.depth(pos) == 0);
        }

        let single_root = match self.index.roots() {
            [root] => Some(*root),
            _ => None,
        };
        if let Some(root) = single_root {
            if self.index.has_children(root) {
                self.rows[root].expanded = true;
                self.emit_toggler(root);
                let children = self.index.children(root).to_vec();
                for child in children {
                    self.set_visible(child, true);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Tri-state checkboxes
    // ------------------------------------------------------------------

    /// Tick or clear a checkbox, cascade to descendants and recompute ancestors.
    ///
    /// Ineligible descendants (no checkbox, or a disabled one) are skipped
    /// but still walked through. The upward walk stops at the first ancestor
    /// without a checkbox.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> CascadeResult<()> {
        let pos = self.index.require(id)?;
        if !self.is_eligible(pos) {
            return Err(CascadeError::NotCheckable {
                id: self.index.id(pos).clone(),
            });
        }

        debug!(id = %self.index.id(pos), checked, "check");
        let state = CheckState::from_bool(checked);
        self.set_check_state(pos, state);

        for desc in self.index.descendants(pos) {
            if self.is_eligible(desc) {
                self.set_check_state(desc, state);
            }
        }

        self.update_ancestors(pos);
        Ok(())
    }

    fn update_ancestors(&mut self, pos: usize) {
        let ancestors: Vec<usize> = self.index.ancestors(pos).collect();
        for ancestor in ancestors {
            if self.rows[ancestor].checkbox.is_none() {
                trace!(id = %self.index.id(ancestor), "ancestor has no checkbox, stopping");
                break;
            }

            let aggregate = CheckState::aggregate(
                self.index
                    .children(ancestor)
                    .iter()
                    // A child without a checkbox is neither checked nor unchecked
                    .map(|&child| {
                        self.rows[child]
                            .checkbox
                            .map_or(CheckState::Mixed, |b| b.state)
                    }),
            );
            if let Some(state) = aggregate {
                self.set_check_state(ancestor, state);
            }
        }
    }

    fn is_eligible(&self, pos: usize) -> bool {
        self.rows[pos].checkbox.is_some_and(|b| b.enabled)
    }

    fn set_check_state(&mut self, pos: usize, state: CheckState) {
        if let Some(checkbox) = self.rows[pos].checkbox.as_mut() {
            if checkbox.state != state {
                checkbox.state = state;
                self.emit(RenderIntent::Checkbox {
                    id: self.index.id(pos).clone(),
                    state,
                });
            }
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Dispatch one host event
    pub fn apply(&mut self, event: &Event) -> CascadeResult<()> {
        match event {
            Event::Toggle(id) => self.toggle_expand(id.as_str()).map(|_| ()),
            Event::Check(id) => self.set_checked(id.as_str(), true),
            Event::Uncheck(id) => self.set_checked(id.as_str(), false),
            Event::ExpandAll => {
                self.expand_all();
                Ok(())
            }
            Event::CollapseAll => {
                self.collapse_all();
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Checkbox state, `None` when the row has no checkbox
    pub fn check_state(&self, id: &str) -> CascadeResult<Option<CheckState>> {
        let pos = self.index.require(id)?;
        Ok(self.rows[pos].checkbox.map(|b| b.state))
    }

    /// Whether the row's checkbox is ticked (checked or mixed)
    pub fn is_checked(&self, id: &str) -> CascadeResult<bool> {
        Ok(self.check_state(id)?.is_some_and(CheckState::is_ticked))
    }

    pub fn is_visible(&self, id: &str) -> CascadeResult<bool> {
        let pos = self.index.require(id)?;
        Ok(self.rows[pos].visible)
    }

    pub fn is_expanded(&self, id: &str) -> CascadeResult<bool> {
        let pos = self.index.require(id)?;
        Ok(self.index.has_children(pos) && self.rows[pos].expanded)
    }

    pub fn toggler_state(&self, id: &str) -> CascadeResult<TogglerState> {
        let pos = self.index.require(id)?;
        Ok(self.toggler_at(pos))
    }

    /// Ids of rows whose checkbox is ticked, optionally limited to `kinds`
    pub fn checked_nodes(&self, kinds: &[String]) -> Vec<&NodeId> {
        self.index
            .records()
            .iter()
            .zip(&self.rows)
            .filter(|(_, row)| row.checkbox.is_some_and(|b| b.state.is_ticked()))
            .filter(|(record, _)| kinds.is_empty() || kinds.contains(&record.kind))
            .map(|(record, _)| &record.id)
            .collect()
    }

    /// Every row in input order
    pub fn rows(&self) -> Vec<RowView<'_>> {
        (0..self.rows.len()).map(|pos| self.row_view(pos)).collect()
    }

    /// Visible rows in input order
    pub fn visible_rows(&self) -> Vec<RowView<'_>> {
        (0..self.rows.len())
            .filter(|&pos| self.rows[pos].visible)
            .map(|pos| self.row_view(pos))
            .collect()
    }

    fn row_view(&self, pos: usize) -> RowView<'_> {
        let record = self.index.record(pos);
        RowView {
            id: &record.id,
            label: record.label(),
            kind: &record.kind,
            depth: self.index.depth(pos),
            toggler: self.toggler_at(pos),
            checkbox: self.rows[pos].checkbox,
            visible: self.rows[pos].visible,
        }
    }

    fn toggler_at(&self, pos: usize) -> TogglerState {
        if !self.index.has_children(pos) {
            TogglerState::None
        } else if self.rows[pos].expanded {
            TogglerState::Expanded
        } else {
            TogglerState::Collapsed
        }
    }

    // ------------------------------------------------------------------
    // Render intents
    // ------------------------------------------------------------------

    fn set_visible(&mut self, pos: usize, visible: bool) {
        if self.rows[pos].visible != visible {
            self.rows[pos].visible = visible;
            self.emit(RenderIntent::RowVisibility {
                id: self.index.id(pos).clone(),
                visible,
            });
        }
    }

    fn emit_toggler(&self, pos: usize) {
        self.emit(RenderIntent::Toggler {
            id: self.index.id(pos).clone(),
            state: self.toggler_at(pos),
        });
    }

    fn emit_row(&self, pos: usize) {
        let id = self.index.id(pos);
        self.emit(RenderIntent::RowVisibility {
            id: id.clone(),
            visible: self.rows[pos].visible,
        });
        self.emit(RenderIntent::Toggler {
            id: id.clone(),
            state: self.toggler_at(pos),
        });
        if let Some(checkbox) = self.rows[pos].checkbox {
            self.emit(RenderIntent::Checkbox {
                id: id.clone(),
                state: checkbox.state,
            });
        }
    }

    fn emit(&self, intent: RenderIntent) {
        self.sink.on_intent(intent);
    }
}
