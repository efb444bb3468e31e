// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchy construction, lookup, traversal, and expand/collapse.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::node::{NodeIdx, TreeNode};
use crate::{MalformedHierarchyError, Record, RecordId};

/// A rooted tree derived from a flat record list.
///
/// Nodes live in an arena indexed by [`NodeIdx`], in the same order as the
/// records the hierarchy was built from. Children keep input order as sibling
/// order.
///
/// ## Example
///
/// ```rust
/// use orgchart_hierarchy::{Hierarchy, Record};
///
/// let records = vec![
///     Record::new("1", None, ()),
///     Record::new("2", Some("1"), ()),
///     Record::new("3", Some("1"), ()),
/// ];
/// let mut tree = Hierarchy::build(&records).unwrap();
/// let root = tree.root();
/// assert_eq!(tree.node(root).children().visible().len(), 2);
///
/// tree.toggle(root);
/// assert_eq!(tree.visible_preorder(), vec![root]);
/// ```
#[derive(Clone, Debug)]
pub struct Hierarchy {
    nodes: Vec<TreeNode>,
    root: NodeIdx,
    by_id: HashMap<RecordId, NodeIdx>,
}

impl Hierarchy {
    /// Builds a tree from `records`.
    ///
    /// Fails if there is not exactly one root, an id repeats, a parent id is
    /// missing, or the parent references form a cycle.
    pub fn build<P>(records: &[Record<P>]) -> Result<Self, MalformedHierarchyError> {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut nodes = Vec::with_capacity(records.len());
        let mut root: Option<NodeIdx> = None;

        for (index, record) in records.iter().enumerate() {
            let idx = NodeIdx::from_index(index);
            if by_id.insert(record.id.clone(), idx).is_some() {
                return Err(MalformedHierarchyError::DuplicateId(record.id.clone()));
            }
            if record.parent_id.is_none() {
                if let Some(first) = root {
                    return Err(MalformedHierarchyError::MultipleRoots {
                        first: records[first.index()].id.clone(),
                        second: record.id.clone(),
                    });
                }
                root = Some(idx);
            }
            nodes.push(TreeNode::new(record.id.clone(), record.related_ids.clone()));
        }
        let root = root.ok_or(MalformedHierarchyError::NoRoot)?;

        for (index, record) in records.iter().enumerate() {
            let Some(parent_id) = &record.parent_id else {
                continue;
            };
            let Some(&parent) = by_id.get(parent_id) else {
                return Err(MalformedHierarchyError::DanglingParent {
                    id: record.id.clone(),
                    parent_id: parent_id.clone(),
                });
            };
            let idx = NodeIdx::from_index(index);
            nodes[index].parent = Some(parent);
            nodes[parent.index()].children.push(idx);
        }

        // Every node reachable from the root gets a depth. Anything left over
        // hangs off a parent loop.
        let mut reached = vec![false; nodes.len()];
        let mut queue = VecDeque::from([root]);
        reached[root.index()] = true;
        while let Some(idx) = queue.pop_front() {
            let depth = nodes[idx.index()].depth + 1;
            let children = nodes[idx.index()].children.all().to_vec();
            for child in children {
                nodes[child.index()].depth = depth;
                reached[child.index()] = true;
                queue.push_back(child);
            }
        }
        if let Some(stray) = reached.iter().position(|r| !r) {
            return Err(MalformedHierarchyError::Cycle(records[stray].id.clone()));
        }

        Ok(Self { nodes, root, by_id })
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeIdx {
        self.root
    }

    /// Number of nodes, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a built hierarchy has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Access a node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` did not come from this hierarchy.
    #[must_use]
    pub fn node(&self, idx: NodeIdx) -> &TreeNode {
        &self.nodes[idx.index()]
    }

    /// Mutable access to a node, for writing layout positions.
    pub fn node_mut(&mut self, idx: NodeIdx) -> &mut TreeNode {
        &mut self.nodes[idx.index()]
    }

    /// Iterate all nodes with their indices, in record order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIdx, &TreeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIdx::from_index(i), n))
    }

    /// Iterate all nodes mutably, in record order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeIdx, &mut TreeNode)> + '_ {
        self.nodes
            .iter_mut()
            .enumerate()
            .map(|(i, n)| (NodeIdx::from_index(i), n))
    }

    /// Finds a node by record id, whether it is visible or hidden.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<NodeIdx> {
        self.by_id.get(id).copied()
    }

    /// Iterate the strict ancestors of `idx`, nearest first.
    pub fn ancestors(&self, idx: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        let mut next = self.nodes[idx.index()].parent;
        core::iter::from_fn(move || {
            let current = next?;
            next = self.nodes[current.index()].parent;
            Some(current)
        })
    }

    /// Returns `true` if `idx` is `root` or lies below it.
    #[must_use]
    pub fn is_in_subtree(&self, idx: NodeIdx, root: NodeIdx) -> bool {
        idx == root || self.ancestors(idx).any(|a| a == root)
    }

    /// Returns `true` if `idx` and every ancestor are expanded down to it.
    #[must_use]
    pub fn is_visible(&self, idx: NodeIdx) -> bool {
        self.ancestors(idx)
            .all(|a| !self.nodes[a.index()].children.is_collapsed())
    }

    /// Visible nodes in depth-first pre-order.
    #[must_use]
    pub fn visible_preorder(&self) -> Vec<NodeIdx> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            out.push(idx);
            stack.extend(self.nodes[idx.index()].children.visible().iter().rev());
        }
        out
    }

    /// Visible nodes in breadth-first order.
    #[must_use]
    pub fn visible_breadth_first(&self) -> Vec<NodeIdx> {
        let mut out = Vec::with_capacity(self.nodes.len());
        out.push(self.root);
        let mut head = 0;
        while let Some(&idx) = out.get(head) {
            out.extend_from_slice(self.nodes[idx.index()].children.visible());
            head += 1;
        }
        out
    }

    /// All nodes, visible or hidden, in depth-first pre-order.
    ///
    /// Mapping each index back to its record reproduces the input set grouped
    /// by sibling order.
    #[must_use]
    pub fn flatten(&self) -> Vec<NodeIdx> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            out.push(idx);
            stack.extend(self.nodes[idx.index()].children.all().iter().rev());
        }
        out
    }

    /// All strict descendants of `idx`, visible or hidden.
    #[must_use]
    pub fn descendants(&self, idx: NodeIdx) -> HashSet<NodeIdx> {
        let mut out = HashSet::new();
        let mut stack: Vec<NodeIdx> = self.nodes[idx.index()].children.all().to_vec();
        while let Some(next) = stack.pop() {
            out.insert(next);
            stack.extend_from_slice(self.nodes[next.index()].children.all());
        }
        out
    }

    /// Swaps a node's visible and hidden children. Returns `false` for leaves.
    pub fn toggle(&mut self, idx: NodeIdx) -> bool {
        self.nodes[idx.index()].children.toggle()
    }

    /// Shows a node's children. Returns `true` if anything changed.
    pub fn expand(&mut self, idx: NodeIdx) -> bool {
        self.nodes[idx.index()].children.is_collapsed() && self.toggle(idx)
    }

    /// Hides a node's children. Returns `true` if anything changed.
    pub fn collapse(&mut self, idx: NodeIdx) -> bool {
        !self.nodes[idx.index()].children.is_collapsed() && self.toggle(idx)
    }

    /// Expands every collapsed ancestor of `idx`. Returns how many changed.
    pub fn expand_path_to(&mut self, idx: NodeIdx) -> usize {
        let path: Vec<NodeIdx> = self.ancestors(idx).collect();
        path.into_iter().filter(|&a| self.expand(a)).count()
    }

    /// Collapses every node at or below `depth`.
    pub fn collapse_from_depth(&mut self, depth: usize) {
        for node in &mut self.nodes {
            if node.depth >= depth && !node.children.is_collapsed() {
                node.children.toggle();
            }
        }
    }

    /// Ids of nodes whose children are currently hidden.
    pub fn collapsed_ids(&self) -> impl Iterator<Item = &RecordId> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.children.is_collapsed())
            .map(|n| &n.id)
    }

    /// Collapses each listed node that exists and has children.
    pub fn collapse_ids<'a>(&mut self, ids: impl IntoIterator<Item = &'a RecordId>) {
        for id in ids {
            if let Some(idx) = self.find(id.as_str()) {
                self.collapse(idx);
            }
        }
    }

    /// Copies layout positions from an earlier hierarchy, matching nodes by id.
    ///
    /// This lets the next layout pass treat them as previous positions, so
    /// animations stay continuous across rebuilds.
    pub fn inherit_positions(&mut self, earlier: &Self) {
        for node in &mut self.nodes {
            if let Some(old) = earlier.find(node.id.as_str()) {
                let old = &earlier.nodes[old.index()];
                node.position = old.position;
                node.previous = old.previous;
            }
        }
    }
}
