// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and their expand/collapse state.

use core::mem;

use kurbo::Point;
use smallvec::SmallVec;

use crate::RecordId;

/// Index of a node inside a [`crate::Hierarchy`].
///
/// A node's index equals the index of its record in the slice the hierarchy
/// was built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(pub(crate) u32);

impl NodeIdx {
    /// Returns the index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeIdx uses 32-bit indices by design."
        )]
        Self(index as u32)
    }
}

/// Ordered child list.
pub type ChildList = SmallVec<[NodeIdx; 4]>;

/// Which slot currently holds a node's children.
///
/// Exactly one slot exists at a time, so a node can never have both visible
/// and hidden children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children {
    /// Children are laid out and drawn.
    Expanded(ChildList),
    /// Children are retained but hidden from layout.
    Collapsed(ChildList),
}

impl Default for Children {
    fn default() -> Self {
        Self::Expanded(ChildList::new())
    }
}

impl Children {
    /// Children that participate in layout.
    #[must_use]
    pub fn visible(&self) -> &[NodeIdx] {
        match self {
            Self::Expanded(list) => list,
            Self::Collapsed(_) => &[],
        }
    }

    /// Children hidden by a collapse.
    #[must_use]
    pub fn hidden(&self) -> &[NodeIdx] {
        match self {
            Self::Expanded(_) => &[],
            Self::Collapsed(list) => list,
        }
    }

    /// All children regardless of state.
    #[must_use]
    pub fn all(&self) -> &[NodeIdx] {
        match self {
            Self::Expanded(list) | Self::Collapsed(list) => list,
        }
    }

    /// Returns `true` if the node has children hidden by a collapse.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        !self.hidden().is_empty()
    }

    /// Moves the children into the other slot. Leaves stay expanded.
    pub(crate) fn toggle(&mut self) -> bool {
        match self {
            Self::Expanded(list) if list.is_empty() => false,
            Self::Expanded(list) => {
                *self = Self::Collapsed(mem::take(list));
                true
            }
            Self::Collapsed(list) => {
                *self = Self::Expanded(mem::take(list));
                true
            }
        }
    }

    pub(crate) fn push(&mut self, child: NodeIdx) {
        match self {
            Self::Expanded(list) | Self::Collapsed(list) => list.push(child),
        }
    }
}

/// One record in tree form.
#[derive(Clone, Debug)]
pub struct TreeNode {
    pub(crate) id: RecordId,
    pub(crate) parent: Option<NodeIdx>,
    pub(crate) depth: usize,
    pub(crate) children: Children,
    pub(crate) related: Vec<RecordId>,
    /// Position assigned by the latest layout pass, if the node was laid out.
    pub position: Option<Point>,
    /// Position from the layout pass before that, if the node was laid out then.
    pub previous: Option<Point>,
}

impl TreeNode {
    pub(crate) fn new(id: RecordId, related: Vec<RecordId>) -> Self {
        Self {
            id,
            parent: None,
            depth: 0,
            children: Children::default(),
            related,
            position: None,
            previous: None,
        }
    }

    /// Identifier of the wrapped record.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Parent node; `None` for the root. Lookup only.
    #[must_use]
    pub fn parent(&self) -> Option<NodeIdx> {
        self.parent
    }

    /// Distance from the root (root is 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child state.
    #[must_use]
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Related record ids, as given in the record.
    #[must_use]
    pub fn related_ids(&self) -> &[RecordId] {
        &self.related
    }
}
