//! Tree index over a flat list of node records.
//!
//! The index is rebuilt on every full load and passed explicitly to the
//! engine. Records are addressed by their position in the input; sibling
//! order always follows input order. Parents are not required to precede
//! their children.

use std::collections::HashMap;

use crate::domain::node::{NodeId, NodeRecord};
use crate::error::{CascadeError, CascadeResult};

/// Validated adjacency view of a node list
#[derive(Debug, Clone)]
pub struct TreeIndex {
    records: Vec<NodeRecord>,
    positions: HashMap<NodeId, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    depths: Vec<usize>,
    roots: Vec<usize>,
}

impl TreeIndex {
    /// Build and validate the index.
    ///
    /// Fails on duplicate ids, parents that are not loaded, and parent
    /// chains that loop.
    pub fn build(records: Vec<NodeRecord>) -> CascadeResult<Self> {
        let mut positions = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if let Some(first) = positions.insert(record.id.clone(), pos) {
                return Err(CascadeError::DuplicateNode {
                    id: record.id.clone(),
                    first,
                    second: pos,
                });
            }
        }

        let mut parents = Vec::with_capacity(records.len());
        let mut children = vec![Vec::new(); records.len()];
        let mut roots = Vec::new();
        for (pos, record) in records.iter().enumerate() {
            match &record.parent_id {
                None => {
                    parents.push(None);
                    roots.push(pos);
                }
                Some(parent_id) => {
                    let parent = *positions.get(parent_id).ok_or_else(|| {
                        CascadeError::MissingParent {
                            id: record.id.clone(),
                            parent: parent_id.clone(),
                        }
                    })?;
                    parents.push(Some(parent));
                    children[parent].push(pos);
                }
            }
        }

        let depths = compute_depths(&records, &parents)?;

        Ok(Self {
            records,
            positions,
            parents,
            children,
            depths,
            roots,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of `id` in the input list
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Like [`position`](Self::position) but reports a miss as an error
    pub fn require(&self, id: &str) -> CascadeResult<usize> {
        self.position(id).ok_or_else(|| CascadeError::UnknownNode {
            id: NodeId::from(id),
        })
    }

    pub fn record(&self, pos: usize) -> &NodeRecord {
        &self.records[pos]
    }

    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    pub fn id(&self, pos: usize) -> &NodeId {
        &self.records[pos].id
    }

    pub fn parent(&self, pos: usize) -> Option<usize> {
        self.parents[pos]
    }

    /// Direct children in input order
    pub fn children(&self, pos: usize) -> &[usize] {
        &self.children[pos]
    }

    pub fn has_children(&self, pos: usize) -> bool {
        !self.children[pos].is_empty()
    }

    pub fn depth(&self, pos: usize) -> usize {
        self.depths[pos]
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.depths.iter().copied().max()
    }

    /// Top-level positions in input order
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Transitive descendants in preorder (siblings in input order)
    pub fn descendants(&self, pos: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.children[pos].iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children[next].iter().rev().copied());
        }
        out
    }

    /// Ancestors, nearest first
    pub fn ancestors(&self, pos: usize) -> Ancestors<'_> {
        Ancestors {
            index: self,
            next: self.parents[pos],
        }
    }
}

/// Iterator over a node's parent chain
pub struct Ancestors<'a> {
    index: &'a TreeIndex,
    next: Option<usize>,
}

impl Iterator for Ancestors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.index.parents[current];
        Some(current)
    }
}

fn compute_depths(records: &[NodeRecord], parents: &[Option<usize>]) -> CascadeResult<Vec<usize>> {
    let mut depths: Vec<Option<usize>> = vec![None; records.len()];
    let mut on_path = vec![false; records.len()];

    for start in 0..records.len() {
        let mut path = Vec::new();
        let mut cursor = Some(start);
        let mut base = None;

        while let Some(pos) = cursor {
            if let Some(depth) = depths[pos] {
                base = Some(depth);
                break;
            }
            if on_path[pos] {
                return Err(CascadeError::ParentCycle {
                    id: records[pos].id.clone(),
                });
            }
            on_path[pos] = true;
            path.push(pos);
            cursor = parents[pos];
        }

        // The last node on the path is either a root or sits right below a
        // node whose depth is already known.
        let mut depth = base.map_or(0, |d| d + 1);
        for &pos in path.iter().rev() {
            depths[pos] = Some(depth);
            on_path[pos] = false;
            depth += 1;
        }
    }

    Ok(depths.into_iter().map(|d| d.unwrap_or(0)).collect())
}

/// Map every node id to its ordered child ids (leaves map to an empty list).
pub fn compute_children(records: &[NodeRecord]) -> CascadeResult<HashMap<NodeId, Vec<NodeId>>> {
    let index = TreeIndex::build(records.to_vec())?;
    Ok((0..index.len())
        .map(|pos| {
            let kids = index
                .children(pos)
                .iter()
                .map(|&child| index.id(child).clone())
                .collect();
            (index.id(pos).clone(), kids)
        })
        .collect())
}

/// Map every node id to its depth (roots are 0).
pub fn compute_depth(records: &[NodeRecord]) -> CascadeResult<HashMap<NodeId, usize>> {
    let index = TreeIndex::build(records.to_vec())?;
    Ok((0..index.len())
        .map(|pos| (index.id(pos).clone(), index.depth(pos)))
        .collect())
}
