// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed reconciliation of the culled set against the materialized scene.

use core::hash::Hash;
use core::mem;

use hashbrown::{HashMap, HashSet};
use kurbo::Point;
use orgchart_hierarchy::{Hierarchy, NodeIdx, RecordId};
use orgchart_layout::Placement;
use orgchart_view::VisibleSet;

use crate::element::{
    CollapseGlyph, ElementFlags, LinkElement, LinkPose, Motion, NodeElement, NodePose,
};

/// Why the scene is being reconciled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpdateKind {
    /// The layout changed because of `source` (a toggled node, or the root for
    /// data changes). Elements animate.
    Layout {
        /// Node the change originated from. Exiting elements move toward it.
        source: NodeIdx,
    },
    /// Only the view transform changed. Elements jump.
    Viewport,
}

/// Node counts from one reconcile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Newly materialized.
    pub entered: usize,
    /// Kept and refreshed, including rescued exits.
    pub updated: usize,
    /// Removed, or started exiting.
    pub exited: usize,
}

/// The materialized part of the chart.
///
/// Elements are keyed by record id: nodes by their own id, tree links by the
/// child's id, related links by `(source id, target id)`. Each
/// [`Scene::reconcile`] diffs the previous elements against a culled
/// [`VisibleSet`]:
///
/// - On [`UpdateKind::Layout`], new nodes grow and fade in from the nearest
///   ancestor's previous position, kept nodes glide to their new position, and
///   vanished nodes glide toward the source node while fading out. Exiting
///   elements stay in the scene until their animation ends.
/// - On [`UpdateKind::Viewport`], new nodes appear in place, kept nodes jump,
///   and nodes scrolled out of range are dropped at once. Elements already
///   animating toward their final pose keep animating.
///
/// Animations start on the next [`Scene::tick`].
#[derive(Clone, Debug)]
pub struct Scene<C> {
    nodes: Vec<NodeElement<C>>,
    links: Vec<LinkElement<RecordId>>,
    related: Vec<LinkElement<(RecordId, RecordId)>>,
    duration_ms: u64,
    selected: Option<RecordId>,
    dragging: Option<RecordId>,
}

impl<C> Default for Scene<C> {
    fn default() -> Self {
        Self::new(400)
    }
}

impl<C> Scene<C> {
    /// An empty scene whose transitions last `duration_ms`.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            related: Vec::new(),
            duration_ms,
            selected: None,
            dragging: None,
        }
    }

    /// Node elements in paint order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeElement<C>] {
        &self.nodes
    }

    /// Element for `id`, if materialized.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&NodeElement<C>> {
        self.nodes.iter().find(|e| e.id.as_str() == id)
    }

    /// Tree link elements.
    #[must_use]
    pub fn links(&self) -> &[LinkElement<RecordId>] {
        &self.links
    }

    /// Related link elements.
    #[must_use]
    pub fn related(&self) -> &[LinkElement<(RecordId, RecordId)>] {
        &self.related
    }

    /// Returns `true` if nothing is materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty() && self.related.is_empty()
    }

    /// Returns `true` while any element animates.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.nodes.iter().any(|e| e.motion.is_moving())
            || self.links.iter().any(|e| e.motion.is_moving())
            || self.related.iter().any(|e| e.motion.is_moving())
    }

    /// The highlighted node.
    #[must_use]
    pub fn selected(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    /// Moves the selection highlight.
    pub fn set_selected(&mut self, id: Option<RecordId>) {
        self.selected = id;
        self.refresh_flags();
    }

    /// Marks the node being dragged.
    pub fn set_dragging(&mut self, id: Option<RecordId>) {
        self.dragging = id;
        self.refresh_flags();
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
        self.related.clear();
    }

    fn flags_for(&self, id: &RecordId) -> ElementFlags {
        let mut flags = ElementFlags::empty();
        flags.set(ElementFlags::SELECTED, self.selected.as_ref() == Some(id));
        flags.set(ElementFlags::DRAGGING, self.dragging.as_ref() == Some(id));
        flags
    }

    fn refresh_flags(&mut self) {
        let mut nodes = mem::take(&mut self.nodes);
        for el in &mut nodes {
            el.flags = self.flags_for(&el.id);
        }
        self.nodes = nodes;
    }

    /// Brings the scene in line with `visible`.
    ///
    /// `render` is called once per visible node to refresh its content.
    pub fn reconcile(
        &mut self,
        tree: &Hierarchy,
        visible: &VisibleSet<'_>,
        kind: UpdateKind,
        mut render: impl FnMut(&Placement) -> C,
    ) -> ReconcileStats {
        let duration = self.duration_ms;
        let mut stats = ReconcileStats::default();

        let wanted: HashSet<&RecordId> = visible.nodes.iter().map(|p| &p.id).collect();
        let mut kept = HashMap::new();
        let mut gone = Vec::new();
        for el in mem::take(&mut self.nodes) {
            if wanted.contains(&el.id) {
                kept.insert(el.id.clone(), el);
            } else {
                gone.push(el);
            }
        }

        let mut next = Vec::with_capacity(visible.nodes.len() + gone.len());
        for placement in &visible.nodes {
            let glyph = CollapseGlyph::for_children(tree.node(placement.node).children());
            let target = NodePose::settled(placement.position);
            let content = render(placement);
            let mut el = if let Some(mut el) = kept.remove(&placement.id) {
                stats.updated += 1;
                el.exiting = false;
                el.content = content;
                match kind {
                    UpdateKind::Layout { .. } => el.motion.animate_to(target, duration),
                    UpdateKind::Viewport => el.motion.snap_to(target),
                }
                el
            } else {
                stats.entered += 1;
                let motion = match kind {
                    UpdateKind::Layout { .. } => {
                        let origin = enter_origin(tree, placement.node, placement.position);
                        Motion::animated(NodePose::collapsed(origin), target, duration)
                    }
                    UpdateKind::Viewport => Motion::still(target),
                };
                NodeElement {
                    id: placement.id.clone(),
                    content,
                    motion,
                    flags: ElementFlags::empty(),
                    glyph,
                    exiting: false,
                }
            };
            el.glyph = glyph;
            el.flags = self.flags_for(&el.id);
            next.push(el);
        }

        let exit_to = match kind {
            UpdateKind::Layout { source } => tree.node(source).position,
            UpdateKind::Viewport => None,
        };
        for mut el in gone {
            match kind {
                UpdateKind::Viewport if el.exiting => next.push(el),
                UpdateKind::Viewport => stats.exited += 1,
                UpdateKind::Layout { .. } => {
                    if !el.exiting {
                        stats.exited += 1;
                        el.exiting = true;
                    }
                    let position = exit_to.unwrap_or(el.motion.target().position);
                    let to = NodePose {
                        position,
                        opacity: 0.0,
                        scale: 1.0,
                    };
                    el.motion.animate_to(to, duration);
                    next.push(el);
                }
            }
        }
        next.retain(|el| !el.exiting || el.motion.is_moving());
        self.nodes = next;

        let links = visible.links.iter().map(|l| {
            let origin = enter_origin(tree, l.target, l.target_position);
            let pose = LinkPose::settled(l.source_position, l.target_position);
            (l.key.clone(), pose, origin)
        });
        reconcile_links(&mut self.links, links, kind, exit_to, duration);

        let related = visible.related.iter().map(|l| {
            let origin = enter_origin(tree, l.source, l.source_position);
            let pose = LinkPose::settled(l.source_position, l.target_position);
            (l.key.clone(), pose, origin)
        });
        reconcile_links(&mut self.related, related, kind, exit_to, duration);

        stats
    }

    /// Advances every animation to `now_ms` and drops finished exits.
    ///
    /// Returns `true` while anything is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut moving = false;
        self.nodes.retain_mut(|el| {
            let still = el.motion.advance(now_ms);
            moving |= still;
            still || !el.exiting
        });
        moving |= tick_links(&mut self.links, now_ms);
        moving |= tick_links(&mut self.related, now_ms);
        moving
    }
}

/// Previous position of the nearest ancestor that had one.
fn enter_origin(tree: &Hierarchy, node: NodeIdx, fallback: Point) -> Point {
    tree.ancestors(node)
        .find_map(|a| tree.node(a).previous)
        .unwrap_or(fallback)
}

fn reconcile_links<K: Clone + Eq + Hash>(
    current: &mut Vec<LinkElement<K>>,
    wanted: impl Iterator<Item = (K, LinkPose, Point)>,
    kind: UpdateKind,
    exit_to: Option<Point>,
    duration: u64,
) {
    let wanted: Vec<(K, LinkPose, Point)> = wanted.collect();
    let keys: HashSet<&K> = wanted.iter().map(|(key, ..)| key).collect();
    let mut kept = HashMap::new();
    let mut gone = Vec::new();
    for el in current.drain(..) {
        if keys.contains(&el.key) {
            kept.insert(el.key.clone(), el);
        } else {
            gone.push(el);
        }
    }

    let mut next = Vec::with_capacity(wanted.len() + gone.len());
    for (key, target, origin) in &wanted {
        let el = if let Some(mut el) = kept.remove(key) {
            el.exiting = false;
            match kind {
                UpdateKind::Layout { .. } => el.motion.animate_to(*target, duration),
                UpdateKind::Viewport => el.motion.snap_to(*target),
            }
            el
        } else {
            let motion = match kind {
                UpdateKind::Layout { .. } => {
                    Motion::animated(LinkPose::folded(*origin, 0.0), *target, duration)
                }
                UpdateKind::Viewport => Motion::still(*target),
            };
            LinkElement {
                key: key.clone(),
                motion,
                exiting: false,
            }
        };
        next.push(el);
    }

    for mut el in gone {
        match kind {
            UpdateKind::Viewport if el.exiting => next.push(el),
            UpdateKind::Viewport => {}
            UpdateKind::Layout { .. } => {
                el.exiting = true;
                let point = exit_to.unwrap_or(el.motion.target().source);
                el.motion.animate_to(LinkPose::folded(point, 0.0), duration);
                next.push(el);
            }
        }
    }
    next.retain(|el| !el.exiting || el.motion.is_moving());
    *current = next;
}

fn tick_links<K>(links: &mut Vec<LinkElement<K>>, now_ms: u64) -> bool {
    let mut moving = false;
    links.retain_mut(|el| {
        let still = el.motion.advance(now_ms);
        moving |= still;
        still || !el.exiting
    });
    moving
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use orgchart_hierarchy::Record;
    use orgchart_layout::{Layout, NodeMetrics};
    use orgchart_view::cull;

    const EVERYTHING: Rect = Rect::new(-1.0e6, -1.0e6, 1.0e6, 1.0e6);

    fn tree() -> Hierarchy {
        let records = vec![
            Record::new("1", None, ()),
            Record::new("2", Some("1"), ()).with_related(["3"]),
            Record::new("3", Some("1"), ()),
        ];
        Hierarchy::build(&records).unwrap()
    }

    fn pass(
        scene: &mut Scene<String>,
        tree: &mut Hierarchy,
        kind: UpdateKind,
        rect: Rect,
    ) -> ReconcileStats {
        let metrics = NodeMetrics::default();
        let layout = Layout::compute(tree, &metrics);
        let visible = cull(&layout, &metrics, rect);
        scene.reconcile(tree, &visible, kind, |p| p.id.to_string())
    }

    fn layout_kind(tree: &Hierarchy) -> UpdateKind {
        UpdateKind::Layout {
            source: tree.root(),
        }
    }

    fn settle(scene: &mut Scene<String>, start: u64) {
        scene.tick(start);
        assert!(!scene.tick(start + 400), "still animating");
    }

    #[test]
    fn first_layout_fades_everything_in_place() {
        let mut tree = tree();
        let mut scene = Scene::new(400);
        let kind = layout_kind(&tree);
        let stats = pass(&mut scene, &mut tree, kind, EVERYTHING);
        assert_eq!(
            stats,
            ReconcileStats {
                entered: 3,
                updated: 0,
                exited: 0
            }
        );
        let two = scene.node("2").unwrap();
        assert_eq!(two.content(), "2");
        assert_eq!(two.pose(), NodePose::collapsed(Point::new(-135.0, 180.0)));
        assert_eq!(scene.links().len(), 2);
        assert_eq!(scene.related().len(), 1);

        assert!(scene.tick(0));
        assert!(!scene.tick(400));
        let two = scene.node("2").unwrap();
        assert_eq!(two.pose(), NodePose::settled(Point::new(-135.0, 180.0)));
        assert_eq!(scene.links()[1].pose().target, Point::new(135.0, 180.0));
    }

    #[test]
    fn expanded_children_grow_out_of_their_parent() {
        let mut tree = tree();
        let root = tree.root();
        tree.collapse(root);
        let mut scene = Scene::new(400);
        let kind = layout_kind(&tree);
        pass(&mut scene, &mut tree, kind, EVERYTHING);
        settle(&mut scene, 0);
        assert_eq!(scene.nodes().len(), 1);
        assert_eq!(scene.nodes()[0].glyph(), CollapseGlyph::Expand);

        tree.expand(root);
        let kind = layout_kind(&tree);
        let stats = pass(&mut scene, &mut tree, kind, EVERYTHING);
        assert_eq!((stats.entered, stats.updated), (2, 1));
        assert_eq!(scene.nodes()[0].glyph(), CollapseGlyph::Collapse);
        let three = scene.node("3").unwrap();
        assert_eq!(three.pose(), NodePose::collapsed(Point::ZERO));
        assert_eq!(three.target(), NodePose::settled(Point::new(135.0, 180.0)));
        assert_eq!(three.glyph(), CollapseGlyph::None);
        assert_eq!(scene.links()[0].pose(), LinkPose::folded(Point::ZERO, 0.0));

        settle(&mut scene, 1_000);
        let three = scene.node("3").unwrap();
        assert_eq!(three.pose(), NodePose::settled(Point::new(135.0, 180.0)));
    }

    #[test]
    fn collapsed_children_exit_toward_the_source() {
        let mut tree = tree();
        let mut scene = Scene::new(400);
        let kind = layout_kind(&tree);
        pass(&mut scene, &mut tree, kind, EVERYTHING);
        settle(&mut scene, 0);

        tree.collapse(tree.root());
        let kind = layout_kind(&tree);
        let stats = pass(&mut scene, &mut tree, kind, EVERYTHING);
        assert_eq!((stats.exited, stats.updated), (2, 1));
        assert_eq!(scene.nodes().len(), 3);
        let two = scene.node("2").unwrap();
        assert!(two.is_exiting());
        assert_eq!(two.target().position, Point::ZERO);
        assert_eq!(two.target().opacity, 0.0);
        assert!(scene.links().iter().all(LinkElement::is_exiting));

        settle(&mut scene, 1_000);
        assert_eq!(scene.nodes().len(), 1);
        assert!(scene.links().is_empty());
        assert!(scene.related().is_empty());
    }

    #[test]
    fn re_entering_nodes_are_rescued_from_exit() {
        let mut tree = tree();
        let mut scene = Scene::new(400);
        let kind = layout_kind(&tree);
        pass(&mut scene, &mut tree, kind, EVERYTHING);
        settle(&mut scene, 0);

        tree.collapse(tree.root());
        let kind = layout_kind(&tree);
        pass(&mut scene, &mut tree, kind, EVERYTHING);
        scene.tick(1_000);
        scene.tick(1_200);

        tree.expand(tree.root());
        let kind = layout_kind(&tree);
        let stats = pass(&mut scene, &mut tree, kind, EVERYTHING);
        assert_eq!((stats.entered, stats.updated), (0, 3));
        assert!(scene.nodes().iter().all(|e| !e.is_exiting()));
        settle(&mut scene, 2_000);
        assert_eq!(scene.nodes().len(), 3);
        assert_eq!(
            scene.node("2").unwrap().pose(),
            NodePose::settled(Point::new(-135.0, 180.0))
        );
    }

    #[test]
    fn viewport_updates_never_animate() {
        let mut tree = tree();
        let mut scene = Scene::new(400);
        let kind = layout_kind(&tree);
        pass(&mut scene, &mut tree, kind, EVERYTHING);
        settle(&mut scene, 0);

        // Only the root row.
        let top = Rect::new(-50.0, 0.0, 50.0, 50.0);
        let stats = pass(&mut scene, &mut tree, UpdateKind::Viewport, top);
        assert_eq!((stats.exited, stats.updated), (2, 1));
        assert_eq!(scene.nodes().len(), 1);
        // Both links still touch the root card.
        assert_eq!(scene.links().len(), 2);
        assert!(scene.related().is_empty());

        let stats = pass(&mut scene, &mut tree, UpdateKind::Viewport, EVERYTHING);
        assert_eq!(stats.entered, 2);
        assert!(!scene.is_animating());
        assert_eq!(
            scene.node("3").unwrap().pose(),
            NodePose::settled(Point::new(135.0, 180.0))
        );
    }

    #[test]
    fn viewport_updates_let_running_transitions_finish() {
        let mut tree = tree();
        let mut scene = Scene::new(400);
        let kind = layout_kind(&tree);
        pass(&mut scene, &mut tree, kind, EVERYTHING);
        scene.tick(0);
        pass(&mut scene, &mut tree, UpdateKind::Viewport, EVERYTHING);
        assert!(scene.is_animating());
        assert!(!scene.tick(400));
    }

    #[test]
    fn selection_and_drag_flags_follow_ids() {
        let mut tree = tree();
        let mut scene = Scene::new(0);
        scene.set_selected(Some("2".into()));
        let kind = layout_kind(&tree);
        pass(&mut scene, &mut tree, kind, EVERYTHING);
        assert_eq!(scene.node("2").unwrap().flags(), ElementFlags::SELECTED);

        scene.set_dragging(Some("2".into()));
        assert_eq!(
            scene.node("2").unwrap().flags(),
            ElementFlags::SELECTED | ElementFlags::DRAGGING
        );
        scene.set_selected(None);
        scene.set_dragging(None);
        assert!(scene.nodes().iter().all(|e| e.flags().is_empty()));
    }
}
