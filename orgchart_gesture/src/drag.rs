// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-restructure: turns a drag gesture into a proposed edit.

use kurbo::{Line, Point, Rect, Vec2};
use orgchart_hierarchy::{Hierarchy, NodeIdx, RecordId};
use orgchart_layout::{Layout, NodeMetrics, Placement};

/// Outset of the reparent highlight around the target card.
const OUTLINE_OUTSET: f64 = 5.0;
/// Gap between a card edge and the reorder insertion line.
const INSERTION_GAP: f64 = 15.0;

/// Side of the reorder target the dragged node lands on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropPosition {
    /// Immediately before the target in sibling order.
    Before,
    /// Immediately after the target in sibling order.
    After,
}

/// A structural edit offered by the current drag position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropProposal {
    /// Make the dragged node a child of `target`.
    Reparent {
        /// New parent.
        target: RecordId,
    },
    /// Move the dragged node next to its sibling `target`.
    Reorder {
        /// Sibling to move next to.
        target: RecordId,
        /// Which side.
        position: DropPosition,
    },
}

impl DropProposal {
    /// The node the proposal refers to.
    #[must_use]
    pub fn target(&self) -> &RecordId {
        match self {
            Self::Reparent { target } | Self::Reorder { target, .. } => target,
        }
    }
}

/// Preview geometry for a proposal, in canvas space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DropIndicator {
    /// Highlight around the new parent.
    Outline(Rect),
    /// Vertical insertion line beside the reorder target.
    InsertionLine(Line),
}

/// The floating copy of the dragged card.
#[derive(Clone, Debug)]
pub struct Ghost<C> {
    /// Content captured when the drag started.
    pub content: C,
    /// Card anchor, following the pointer.
    pub position: Point,
}

/// Why a drag could not start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The root has no parent to leave.
    #[error("the root node cannot be dragged")]
    Root,
    /// Another drag is in progress.
    #[error("a drag is already in progress")]
    AlreadyDragging,
    /// The node is hidden inside a collapsed subtree.
    #[error("node is not laid out")]
    NotLaidOut,
}

#[derive(Clone, Debug)]
struct Drag<C> {
    node: NodeIdx,
    id: RecordId,
    parent: NodeIdx,
    /// Card anchor minus pointer, at start.
    grab: Vec2,
    ghost: Ghost<C>,
    proposal: Option<(DropProposal, DropIndicator)>,
}

/// The `Idle → Dragging → Idle` machine.
///
/// Candidates are every laid-out node, on screen or not, in breadth-first
/// order. The drag point is the dragged card's anchor moved by the pointer
/// travel, so grabbing a card anywhere behaves the same. On each move:
///
/// 1. If the drag point is inside another card (edges included) that is not in
///    the dragged subtree, that card is proposed as the new parent.
/// 2. Otherwise, among the dragged node's siblings whose row band contains the
///    drag point, the horizontally nearest (first on ties) is proposed as a
///    reorder target if it is less than one card width away.
#[derive(Clone, Debug)]
pub struct DragController<C> {
    drag: Option<Drag<C>>,
}

impl<C> Default for DragController<C> {
    fn default() -> Self {
        Self { drag: None }
    }
}

impl<C> DragController<C> {
    /// An idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between a successful [`start`](Self::start) and
    /// [`end`](Self::end) or [`cancel`](Self::cancel).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Id of the dragged node.
    #[must_use]
    pub fn dragged(&self) -> Option<&RecordId> {
        self.drag.as_ref().map(|d| &d.id)
    }

    /// The floating card.
    #[must_use]
    pub fn ghost(&self) -> Option<&Ghost<C>> {
        self.drag.as_ref().map(|d| &d.ghost)
    }

    /// The current proposal.
    #[must_use]
    pub fn proposal(&self) -> Option<&DropProposal> {
        self.drag.as_ref()?.proposal.as_ref().map(|(p, _)| p)
    }

    /// Preview geometry for the current proposal.
    #[must_use]
    pub fn indicator(&self) -> Option<&DropIndicator> {
        self.drag.as_ref()?.proposal.as_ref().map(|(_, i)| i)
    }

    /// Starts dragging `node`, grabbed at `pointer`, with `snapshot` as ghost content.
    pub fn start(
        &mut self,
        layout: &Layout,
        node: NodeIdx,
        pointer: Point,
        snapshot: C,
    ) -> Result<(), DragError> {
        if self.drag.is_some() {
            return Err(DragError::AlreadyDragging);
        }
        let placement = layout.placement(node).ok_or(DragError::NotLaidOut)?;
        let parent = placement.parent.ok_or(DragError::Root)?;
        self.drag = Some(Drag {
            node,
            id: placement.id.clone(),
            parent,
            grab: placement.position - pointer,
            ghost: Ghost {
                content: snapshot,
                position: placement.position,
            },
            proposal: None,
        });
        Ok(())
    }

    /// Follows the pointer and recomputes the proposal.
    ///
    /// Does nothing when idle.
    pub fn update(
        &mut self,
        tree: &Hierarchy,
        layout: &Layout,
        metrics: &NodeMetrics,
        pointer: Point,
    ) -> Option<&DropProposal> {
        let drag = self.drag.as_mut()?;
        let point = pointer + drag.grab;
        drag.ghost.position = point;
        drag.proposal = propose(tree, layout, metrics, drag.node, drag.parent, point);
        drag.proposal.as_ref().map(|(p, _)| p)
    }

    /// Finishes the gesture, returning the proposal to apply, if any.
    pub fn end(&mut self) -> Option<DropProposal> {
        self.drag.take()?.proposal.map(|(p, _)| p)
    }

    /// Abandons the gesture. Returns `true` if one was active.
    pub fn cancel(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

fn propose(
    tree: &Hierarchy,
    layout: &Layout,
    metrics: &NodeMetrics,
    dragged: NodeIdx,
    parent: NodeIdx,
    point: Point,
) -> Option<(DropProposal, DropIndicator)> {
    let half_height = metrics.height / 2.0;
    let mut nearest: Option<(&Placement, f64)> = None;

    for candidate in layout.placements() {
        if candidate.node == dragged {
            continue;
        }
        let rect = metrics.node_rect(candidate.position);
        if contains_inclusive(rect, point) {
            if tree.is_in_subtree(candidate.node, dragged) {
                continue;
            }
            let outline = rect.inflate(OUTLINE_OUTSET, OUTLINE_OUTSET);
            return Some((
                DropProposal::Reparent {
                    target: candidate.id.clone(),
                },
                DropIndicator::Outline(outline),
            ));
        }
        if candidate.parent == Some(parent) {
            let dx = (candidate.position.x - point.x).abs();
            let dy = (candidate.position.y + half_height - point.y).abs();
            if dy < half_height && nearest.is_none_or(|(_, best)| dx < best) {
                nearest = Some((candidate, dx));
            }
        }
    }

    let (target, dx) = nearest?;
    if dx >= metrics.width {
        return None;
    }
    let cx = target.position.x;
    let (position, x) = if point.x < cx {
        (DropPosition::Before, cx - metrics.width / 2.0 - INSERTION_GAP)
    } else {
        (DropPosition::After, cx + metrics.width / 2.0 + INSERTION_GAP)
    };
    let y = target.position.y;
    Some((
        DropProposal::Reorder {
            target: target.id.clone(),
            position,
        },
        DropIndicator::InsertionLine(Line::new((x, y), (x, y + metrics.height))),
    ))
}

fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_hierarchy::Record;

    // 1
    // ├── 2
    // │   └── 4
    // └── 3
    fn fixture() -> (Hierarchy, Layout, NodeMetrics) {
        let records = vec![
            Record::new("1", None, ()),
            Record::new("2", Some("1"), ()),
            Record::new("3", Some("1"), ()),
            Record::new("4", Some("2"), ()),
        ];
        let mut tree = Hierarchy::build(&records).unwrap();
        let metrics = NodeMetrics::default();
        let layout = Layout::compute(&mut tree, &metrics);
        (tree, layout, metrics)
    }

    fn start_on(
        ctl: &mut DragController<&'static str>,
        tree: &Hierarchy,
        layout: &Layout,
        id: &str,
    ) -> Point {
        let node = tree.find(id).unwrap();
        let at = layout.placement(node).unwrap().position;
        ctl.start(layout, node, at, "ghost").unwrap();
        at
    }

    #[test]
    fn root_and_second_drags_are_rejected() {
        let (tree, layout, _) = fixture();
        let mut ctl = DragController::new();
        assert_eq!(
            ctl.start(&layout, tree.root(), Point::ZERO, "ghost"),
            Err(DragError::Root)
        );
        assert!(!ctl.is_dragging());
        start_on(&mut ctl, &tree, &layout, "3");
        assert_eq!(
            ctl.start(&layout, tree.find("2").unwrap(), Point::ZERO, "ghost"),
            Err(DragError::AlreadyDragging)
        );
        assert_eq!(ctl.dragged().map(RecordId::as_str), Some("3"));
    }

    #[test]
    fn dropping_onto_a_card_reparents() {
        let (tree, layout, metrics) = fixture();
        let mut ctl = DragController::new();
        start_on(&mut ctl, &tree, &layout, "3");

        // Card "2" spans x -245..-25, y 180..280; its top-left corner counts.
        let proposal = ctl.update(&tree, &layout, &metrics, Point::new(-245.0, 180.0));
        assert_eq!(
            proposal,
            Some(&DropProposal::Reparent {
                target: "2".into()
            })
        );
        assert_eq!(
            ctl.indicator(),
            Some(&DropIndicator::Outline(Rect::new(-250.0, 175.0, -20.0, 285.0)))
        );
        assert_eq!(ctl.ghost().unwrap().position, Point::new(-245.0, 180.0));
        assert_eq!(
            ctl.end(),
            Some(DropProposal::Reparent {
                target: "2".into()
            })
        );
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn own_subtree_is_never_offered() {
        let (tree, layout, metrics) = fixture();
        let mut ctl = DragController::new();
        start_on(&mut ctl, &tree, &layout, "2");
        // Over card "4", a child of the dragged node.
        assert_eq!(
            ctl.update(&tree, &layout, &metrics, Point::new(-135.0, 400.0)),
            None
        );
        assert_eq!(ctl.indicator(), None);
        assert_eq!(ctl.end(), None);
    }

    #[test]
    fn gaps_between_siblings_reorder() {
        let (tree, layout, metrics) = fixture();
        let mut ctl = DragController::new();
        start_on(&mut ctl, &tree, &layout, "2");

        // In the gap left of card "3" (x 25..245).
        let proposal = ctl.update(&tree, &layout, &metrics, Point::new(10.0, 230.0));
        assert_eq!(
            proposal,
            Some(&DropProposal::Reorder {
                target: "3".into(),
                position: DropPosition::Before,
            })
        );
        assert_eq!(
            ctl.indicator(),
            Some(&DropIndicator::InsertionLine(Line::new(
                (10.0, 180.0),
                (10.0, 280.0)
            )))
        );

        // Right of card "3", still within one card width of its center.
        let proposal = ctl.update(&tree, &layout, &metrics, Point::new(300.0, 230.0));
        assert_eq!(
            proposal.map(DropProposal::target).map(RecordId::as_str),
            Some("3")
        );
        assert!(matches!(
            ctl.proposal(),
            Some(DropProposal::Reorder {
                position: DropPosition::After,
                ..
            })
        ));

        // Too far right, or outside the row band.
        assert_eq!(
            ctl.update(&tree, &layout, &metrics, Point::new(400.0, 230.0)),
            None
        );
        assert_eq!(
            ctl.update(&tree, &layout, &metrics, Point::new(10.0, 290.0)),
            None
        );
        assert!(ctl.cancel());
        assert!(!ctl.cancel());
    }

    #[test]
    fn drag_point_keeps_the_grab_offset() {
        let (tree, layout, metrics) = fixture();
        let mut ctl = DragController::new();
        let three = tree.find("3").unwrap();
        // Grab card "3" 40 px below its anchor.
        ctl.start(&layout, three, Point::new(135.0, 220.0), "ghost")
            .unwrap();
        ctl.update(&tree, &layout, &metrics, Point::new(-135.0, 240.0));
        assert_eq!(ctl.ghost().unwrap().position, Point::new(-135.0, 200.0));
        assert_eq!(ctl.proposal().map(|p| p.target().as_str()), Some("2"));
    }
}
