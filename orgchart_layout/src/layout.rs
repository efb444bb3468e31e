// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned tree: node placements and link descriptors.

use kurbo::{Point, Rect};
use orgchart_hierarchy::{Hierarchy, NodeIdx, RecordId};

use crate::NodeMetrics;
use crate::tidy::{Separation, tidy_columns};

/// A laid-out node.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// The node.
    pub node: NodeIdx,
    /// Record id of the node.
    pub id: RecordId,
    /// Parent node, if any.
    pub parent: Option<NodeIdx>,
    /// Top-center anchor of the card.
    pub position: Point,
}

/// A parent → child edge between two laid-out nodes.
///
/// Keyed by the child's id: every child has exactly one parent link.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLink {
    /// Parent node.
    pub source: NodeIdx,
    /// Child node.
    pub target: NodeIdx,
    /// Child record id.
    pub key: RecordId,
    /// Parent anchor.
    pub source_position: Point,
    /// Child anchor.
    pub target_position: Point,
}

/// A non-hierarchical association between two laid-out nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct RelatedLink {
    /// Node carrying the related id.
    pub source: NodeIdx,
    /// Node the id refers to.
    pub target: NodeIdx,
    /// `(source id, target id)`.
    pub key: (RecordId, RecordId),
    /// Source anchor.
    pub source_position: Point,
    /// Target anchor.
    pub target_position: Point,
}

/// Output of one layout pass.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    placements: Vec<Placement>,
    /// Placement slot per node index; `usize::MAX` for hidden nodes.
    slots: Vec<usize>,
    links: Vec<TreeLink>,
    related: Vec<RelatedLink>,
}

impl Layout {
    /// Lays out the visible part of `tree` and records positions on its nodes.
    ///
    /// Every node's [`previous`](orgchart_hierarchy::TreeNode::previous) is set to its
    /// [`position`](orgchart_hierarchy::TreeNode::position) before this pass, and nodes
    /// that are hidden now end up with no position.
    pub fn compute(tree: &mut Hierarchy, metrics: &NodeMetrics) -> Self {
        let columns = tidy_columns(tree, Separation::default());
        let column_pitch = metrics.column_pitch();
        let row_pitch = metrics.row_pitch();

        for (idx, node) in tree.iter_mut() {
            node.previous = node.position.take();
            if let Some(column) = columns[idx.index()] {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "tree depths are far below 2^52."
                )]
                let y = node.depth() as f64 * row_pitch;
                node.position = Some(Point::new(column * column_pitch, y));
            }
        }

        let mut slots = vec![usize::MAX; tree.len()];
        let mut placements = Vec::with_capacity(tree.len());
        for idx in tree.visible_breadth_first() {
            let node = tree.node(idx);
            let Some(position) = node.position else {
                continue;
            };
            slots[idx.index()] = placements.len();
            placements.push(Placement {
                node: idx,
                id: node.id().clone(),
                parent: node.parent(),
                position,
            });
        }
        let placed = |idx: NodeIdx| slots.get(idx.index()).and_then(|&s| placements.get(s));

        let links = placements
            .iter()
            .filter_map(|child| {
                let parent = placed(child.parent?)?;
                Some(TreeLink {
                    source: parent.node,
                    target: child.node,
                    key: child.id.clone(),
                    source_position: parent.position,
                    target_position: child.position,
                })
            })
            .collect();

        let mut related = Vec::new();
        for source in &placements {
            for id in tree.node(source.node).related_ids() {
                let Some(target) = tree.find(id.as_str()).and_then(placed) else {
                    continue;
                };
                related.push(RelatedLink {
                    source: source.node,
                    target: target.node,
                    key: (source.id.clone(), target.id.clone()),
                    source_position: source.position,
                    target_position: target.position,
                });
            }
        }

        Self {
            placements,
            slots,
            links,
            related,
        }
    }

    /// Laid-out nodes in breadth-first order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of `node`, if it was laid out.
    #[must_use]
    pub fn placement(&self, node: NodeIdx) -> Option<&Placement> {
        let slot = *self.slots.get(node.index())?;
        self.placements.get(slot)
    }

    /// Parent → child links.
    #[must_use]
    pub fn links(&self) -> &[TreeLink] {
        &self.links
    }

    /// Related-id links whose both ends are laid out.
    #[must_use]
    pub fn related(&self) -> &[RelatedLink] {
        &self.related
    }

    /// Returns `true` if nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Union of every laid-out card box.
    #[must_use]
    pub fn bounds(&self, metrics: &NodeMetrics) -> Option<Rect> {
        self.placements
            .iter()
            .map(|p| metrics.node_rect(p.position))
            .reduce(|acc, r| acc.union(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_hierarchy::Record;

    fn sample() -> Hierarchy {
        let records = vec![
            Record::new("1", None, ()),
            Record::new("2", Some("1"), ()).with_related(["3", "missing"]),
            Record::new("3", Some("1"), ()),
            Record::new("4", Some("2"), ()),
        ];
        Hierarchy::build(&records).unwrap()
    }

    #[test]
    fn rows_follow_depth_and_columns_follow_pitch() {
        let mut tree = sample();
        let metrics = NodeMetrics::default();
        let layout = Layout::compute(&mut tree, &metrics);

        let pos = |id: &str| layout.placement(tree.find(id).unwrap()).unwrap().position;
        assert_eq!(pos("1"), Point::new(0.0, 0.0));
        assert_eq!(pos("2"), Point::new(-135.0, 180.0));
        assert_eq!(pos("3"), Point::new(135.0, 180.0));
        assert_eq!(pos("4"), Point::new(-135.0, 360.0));

        let order: Vec<&str> = layout.placements().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, ["1", "2", "3", "4"]);
    }

    #[test]
    fn links_connect_parents_to_children() {
        let mut tree = sample();
        let layout = Layout::compute(&mut tree, &NodeMetrics::default());
        let keys: Vec<&str> = layout.links().iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, ["2", "3", "4"]);
        let link = &layout.links()[2];
        assert_eq!(link.source, tree.find("2").unwrap());
        assert_eq!(link.source_position, Point::new(-135.0, 180.0));
        assert_eq!(link.target_position, Point::new(-135.0, 360.0));
    }

    #[test]
    fn related_links_need_both_ends_laid_out() {
        let mut tree = sample();
        let metrics = NodeMetrics::default();
        let layout = Layout::compute(&mut tree, &metrics);
        assert_eq!(layout.related().len(), 1);
        assert_eq!(layout.related()[0].key.1.as_str(), "3");

        let three = tree.find("3").unwrap();
        tree.collapse(tree.root());
        let layout = Layout::compute(&mut tree, &metrics);
        assert!(layout.related().is_empty());
        assert!(layout.placement(three).is_none());
        assert_eq!(layout.links().len(), 0);
    }

    #[test]
    fn positions_roll_into_previous() {
        let mut tree = sample();
        let metrics = NodeMetrics::default();
        let two = tree.find("2").unwrap();
        let four = tree.find("4").unwrap();

        let _ = Layout::compute(&mut tree, &metrics);
        assert_eq!(tree.node(two).previous, None);
        let first = tree.node(two).position;

        tree.collapse(two);
        let _ = Layout::compute(&mut tree, &metrics);
        assert_eq!(tree.node(two).previous, first);
        assert_eq!(tree.node(four).position, None);
        assert!(tree.node(four).previous.is_some());

        let _ = Layout::compute(&mut tree, &metrics);
        assert_eq!(tree.node(four).previous, None);
    }

    #[test]
    fn bounds_cover_every_card() {
        let mut tree = sample();
        let metrics = NodeMetrics::default();
        let layout = Layout::compute(&mut tree, &metrics);
        assert_eq!(
            layout.bounds(&metrics),
            Some(Rect::new(-245.0, 0.0, 245.0, 460.0))
        );
        assert_eq!(Layout::default().bounds(&metrics), None);
    }
}
