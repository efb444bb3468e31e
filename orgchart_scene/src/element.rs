// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Materialized scene elements.

use kurbo::{BezPath, Point};
use orgchart_hierarchy::{Children, RecordId};
use orgchart_layout::elbow_path;
use orgchart_view::{Lerp, Tween};

bitflags::bitflags! {
    /// Per-node highlight state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// The node is the current selection.
        const SELECTED = 0b0000_0001;
        /// The node is being dragged.
        const DRAGGING = 0b0000_0010;
    }
}

/// Symbol on a node's collapse toggle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CollapseGlyph {
    /// Leaf; no toggle is drawn.
    #[default]
    None,
    /// Children are hidden; the toggle expands.
    Expand,
    /// Children are shown; the toggle collapses.
    Collapse,
}

impl CollapseGlyph {
    /// Glyph for a node with these children.
    #[must_use]
    pub fn for_children(children: &Children) -> Self {
        match children {
            _ if children.all().is_empty() => Self::None,
            Children::Collapsed(_) => Self::Expand,
            Children::Expanded(_) => Self::Collapse,
        }
    }

    /// Character to draw, if any.
    #[must_use]
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Expand => Some('+'),
            Self::Collapse => Some('-'),
        }
    }
}

/// Animated properties of a node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodePose {
    /// Card anchor (top-center) in canvas space.
    pub position: Point,
    /// 0 is transparent.
    pub opacity: f64,
    /// Scale about the anchor.
    pub scale: f64,
}

impl NodePose {
    /// Fully shown at `position`.
    #[must_use]
    pub fn settled(position: Point) -> Self {
        Self {
            position,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    /// Invisible and shrunk to nothing at `position`.
    #[must_use]
    pub fn collapsed(position: Point) -> Self {
        Self {
            position,
            opacity: 0.0,
            scale: 0.0,
        }
    }
}

impl Lerp for NodePose {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            position: Lerp::lerp(self.position, other.position, t),
            opacity: Lerp::lerp(self.opacity, other.opacity, t),
            scale: Lerp::lerp(self.scale, other.scale, t),
        }
    }
}

/// Animated properties of a link.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkPose {
    /// Anchor of the upper card.
    pub source: Point,
    /// Anchor of the lower card.
    pub target: Point,
    /// 0 is transparent.
    pub opacity: f64,
}

impl LinkPose {
    /// Fully shown between two anchors.
    #[must_use]
    pub fn settled(source: Point, target: Point) -> Self {
        Self {
            source,
            target,
            opacity: 1.0,
        }
    }

    /// Both ends folded onto `point`.
    #[must_use]
    pub fn folded(point: Point, opacity: f64) -> Self {
        Self {
            source: point,
            target: point,
            opacity,
        }
    }
}

impl Lerp for LinkPose {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            source: Lerp::lerp(self.source, other.source, t),
            target: Lerp::lerp(self.target, other.target, t),
            opacity: Lerp::lerp(self.opacity, other.opacity, t),
        }
    }
}

/// A pose that is either still or moving toward a target.
#[derive(Clone, Debug)]
pub(crate) struct Motion<T> {
    pose: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp + PartialEq> Motion<T> {
    pub(crate) fn still(pose: T) -> Self {
        Self { pose, tween: None }
    }

    pub(crate) fn animated(from: T, to: T, duration_ms: u64) -> Self {
        Self {
            pose: from,
            tween: Some(Tween::new(from, to, duration_ms)),
        }
    }

    pub(crate) fn pose(&self) -> T {
        self.pose
    }

    /// Final pose, once every tween lands.
    pub(crate) fn target(&self) -> T {
        self.tween.as_ref().map_or(self.pose, Tween::target)
    }

    pub(crate) fn is_moving(&self) -> bool {
        self.tween.is_some()
    }

    pub(crate) fn animate_to(&mut self, to: T, duration_ms: u64) {
        match &mut self.tween {
            Some(tween) if tween.target() == to => {}
            Some(tween) => tween.retarget(to),
            None if self.pose == to => {}
            None => self.tween = Some(Tween::new(self.pose, to, duration_ms)),
        }
    }

    /// Jumps to `to`, unless a tween already heads there.
    pub(crate) fn snap_to(&mut self, to: T) {
        if self.target() != to {
            self.tween = None;
            self.pose = to;
        }
    }

    /// Returns `true` while still moving.
    pub(crate) fn advance(&mut self, now_ms: u64) -> bool {
        let Some(tween) = &mut self.tween else {
            return false;
        };
        self.pose = tween.advance(now_ms);
        if tween.is_done() {
            self.tween = None;
        }
        self.tween.is_some()
    }
}

/// A materialized node card.
#[derive(Clone, Debug)]
pub struct NodeElement<C> {
    pub(crate) id: RecordId,
    pub(crate) content: C,
    pub(crate) motion: Motion<NodePose>,
    pub(crate) flags: ElementFlags,
    pub(crate) glyph: CollapseGlyph,
    pub(crate) exiting: bool,
}

impl<C> NodeElement<C> {
    /// Record id.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Output of the content callback as of the last reconcile.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> NodePose {
        self.motion.pose()
    }

    /// Pose the element settles at.
    #[must_use]
    pub fn target(&self) -> NodePose {
        self.motion.target()
    }

    /// Highlight state.
    #[must_use]
    pub fn flags(&self) -> ElementFlags {
        self.flags
    }

    /// Collapse toggle glyph.
    #[must_use]
    pub fn glyph(&self) -> CollapseGlyph {
        self.glyph
    }

    /// Returns `true` while the element animates out before removal.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_moving()
    }
}

/// A materialized link, keyed by `K`.
#[derive(Clone, Debug)]
pub struct LinkElement<K> {
    pub(crate) key: K,
    pub(crate) motion: Motion<LinkPose>,
    pub(crate) exiting: bool,
}

impl<K> LinkElement<K> {
    /// Link key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> LinkPose {
        self.motion.pose()
    }

    /// Returns `true` while the link animates out before removal.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Elbow path for the current pose.
    #[must_use]
    pub fn path(&self, node_height: f64) -> BezPath {
        let pose = self.motion.pose();
        elbow_path(pose.source, pose.target, node_height)
    }
}
