// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-time tidy tree placement (Buchheim, Jünger, Leipert).
//!
//! Only the horizontal axis is computed here, in units of one sibling
//! separation. Rows are assigned by depth elsewhere.

use std::collections::VecDeque;

use orgchart_hierarchy::{Hierarchy, NodeIdx};

/// Separation between horizontally adjacent nodes, in columns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Separation {
    /// Between nodes that share a parent.
    pub(crate) siblings: f64,
    /// Between nodes of different parents.
    pub(crate) cousins: f64,
}

impl Default for Separation {
    fn default() -> Self {
        Self {
            siblings: 1.0,
            cousins: 2.0,
        }
    }
}

/// Per-node working state for the two walks.
#[derive(Clone, Debug)]
struct Walk {
    node: Option<NodeIdx>,
    parent: usize,
    children: Vec<usize>,
    /// Position among siblings.
    number: usize,
    prelim: f64,
    modifier: f64,
    change: f64,
    shift: f64,
    thread: Option<usize>,
    ancestor: usize,
    default_ancestor: Option<usize>,
}

impl Walk {
    fn new(node: Option<NodeIdx>, me: usize, parent: usize, number: usize) -> Self {
        Self {
            node,
            parent,
            children: Vec::new(),
            number,
            prelim: 0.0,
            modifier: 0.0,
            change: 0.0,
            shift: 0.0,
            thread: None,
            ancestor: me,
            default_ancestor: None,
        }
    }
}

/// Slot 0 is a virtual parent above the real root.
const VIRTUAL: usize = 0;
const ROOT: usize = 1;

struct Tidy {
    walks: Vec<Walk>,
    separation: Separation,
}

/// Computes column coordinates for every visible node.
///
/// The result is indexed by [`NodeIdx::index`]; hidden nodes are `None`. The
/// root lands at `0.0`.
pub(crate) fn tidy_columns(tree: &Hierarchy, separation: Separation) -> Vec<Option<f64>> {
    let mut tidy = Tidy::new(tree, separation);
    tidy.run();

    let mut columns = vec![None; tree.len()];
    for walk in &tidy.walks[ROOT..] {
        if let Some(node) = walk.node {
            columns[node.index()] = Some(walk.prelim);
        }
    }
    columns
}

impl Tidy {
    fn new(tree: &Hierarchy, separation: Separation) -> Self {
        let mut walks = vec![Walk::new(None, VIRTUAL, VIRTUAL, 0)];
        // Breadth-first numbering keeps parents before children and siblings
        // in order.
        let mut queue = VecDeque::from([(tree.root(), VIRTUAL, 0_usize)]);
        while let Some((node, parent, number)) = queue.pop_front() {
            let me = walks.len();
            walks.push(Walk::new(Some(node), me, parent, number));
            walks[parent].children.push(me);
            for (i, &child) in tree.node(node).children().visible().iter().enumerate() {
                queue.push_back((child, me, i));
            }
        }
        Self { walks, separation }
    }

    fn run(&mut self) {
        let mut post = Vec::with_capacity(self.walks.len());
        let mut stack = vec![ROOT];
        while let Some(v) = stack.pop() {
            post.push(v);
            stack.extend_from_slice(&self.walks[v].children);
        }
        for &v in post.iter().rev() {
            self.first_walk(v);
        }
        self.walks[VIRTUAL].modifier = -self.walks[ROOT].prelim;
        // Parents precede children in slot order.
        for v in ROOT..self.walks.len() {
            let parent_mod = self.walks[self.walks[v].parent].modifier;
            let walk = &mut self.walks[v];
            walk.prelim += parent_mod;
            walk.modifier += parent_mod;
        }
    }

    fn separation(&self, a: usize, b: usize) -> f64 {
        if self.walks[a].parent == self.walks[b].parent {
            self.separation.siblings
        } else {
            self.separation.cousins
        }
    }

    fn next_left(&self, v: usize) -> Option<usize> {
        let walk = &self.walks[v];
        walk.children.first().copied().or(walk.thread)
    }

    fn next_right(&self, v: usize) -> Option<usize> {
        let walk = &self.walks[v];
        walk.children.last().copied().or(walk.thread)
    }

    fn first_walk(&mut self, v: usize) {
        let parent = self.walks[v].parent;
        let number = self.walks[v].number;
        let left = (number > 0).then(|| self.walks[parent].children[number - 1]);

        if let (Some(&first), Some(&last)) =
            (self.walks[v].children.first(), self.walks[v].children.last())
        {
            self.execute_shifts(v);
            let midpoint = (self.walks[first].prelim + self.walks[last].prelim) / 2.0;
            if let Some(left) = left {
                let prelim = self.walks[left].prelim + self.separation(v, left);
                self.walks[v].prelim = prelim;
                self.walks[v].modifier = prelim - midpoint;
            } else {
                self.walks[v].prelim = midpoint;
            }
        } else if let Some(left) = left {
            self.walks[v].prelim = self.walks[left].prelim + self.separation(v, left);
        }

        let first_sibling = self.walks[parent].children[0];
        let ancestor = self.walks[parent].default_ancestor.unwrap_or(first_sibling);
        let ancestor = self.apportion(v, left, ancestor);
        self.walks[parent].default_ancestor = Some(ancestor);
    }

    /// Pushes the subtree at `v` right until it clears the forest to its left.
    fn apportion(&mut self, v: usize, left: Option<usize>, mut ancestor: usize) -> usize {
        let Some(left) = left else {
            return ancestor;
        };
        let parent = self.walks[v].parent;
        let mut vip = v;
        let mut vop = v;
        let mut vim = left;
        let mut vom = self.walks[parent].children[0];
        let mut sip = self.walks[vip].modifier;
        let mut sop = self.walks[vop].modifier;
        let mut sim = self.walks[vim].modifier;
        let mut som = self.walks[vom].modifier;

        let mut next_vim = self.next_right(vim);
        let mut next_vip = self.next_left(vip);
        while let (Some(im), Some(ip)) = (next_vim, next_vip) {
            vim = im;
            vip = ip;
            // The outer contours of the combined forests reach at least as deep
            // as the inner ones.
            vom = self.next_left(vom).unwrap_or(vom);
            vop = self.next_right(vop).unwrap_or(vop);
            self.walks[vop].ancestor = v;

            let shift = self.walks[vim].prelim + sim - self.walks[vip].prelim - sip
                + self.separation(vim, vip);
            if shift > 0.0 {
                let moved = self.next_ancestor(vim, v, ancestor);
                self.move_subtree(moved, v, shift);
                sip += shift;
                sop += shift;
            }
            sim += self.walks[vim].modifier;
            sip += self.walks[vip].modifier;
            som += self.walks[vom].modifier;
            sop += self.walks[vop].modifier;

            next_vim = self.next_right(vim);
            next_vip = self.next_left(vip);
        }

        if let Some(im) = next_vim {
            if self.next_right(vop).is_none() {
                self.walks[vop].thread = Some(im);
                self.walks[vop].modifier += sim - sop;
            }
        }
        if let Some(ip) = next_vip {
            if self.next_left(vom).is_none() {
                self.walks[vom].thread = Some(ip);
                self.walks[vom].modifier += sip - som;
                ancestor = v;
            }
        }
        ancestor
    }

    fn next_ancestor(&self, vim: usize, v: usize, ancestor: usize) -> usize {
        let candidate = self.walks[vim].ancestor;
        if self.walks[candidate].parent == self.walks[v].parent {
            candidate
        } else {
            ancestor
        }
    }

    fn move_subtree(&mut self, wm: usize, wp: usize, shift: f64) {
        let gap = self.walks[wp].number.saturating_sub(self.walks[wm].number).max(1);
        #[allow(
            clippy::cast_precision_loss,
            reason = "sibling counts are far below 2^52."
        )]
        let change = shift / gap as f64;
        self.walks[wp].change -= change;
        self.walks[wp].shift += shift;
        self.walks[wm].change += change;
        self.walks[wp].prelim += shift;
        self.walks[wp].modifier += shift;
    }

    fn execute_shifts(&mut self, v: usize) {
        let mut shift = 0.0;
        let mut change = 0.0;
        for k in (0..self.walks[v].children.len()).rev() {
            let child = self.walks[v].children[k];
            let walk = &mut self.walks[child];
            walk.prelim += shift;
            walk.modifier += shift;
            change += walk.change;
            shift += walk.shift + change;
        }
    }
}
