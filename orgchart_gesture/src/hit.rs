// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point queries against laid-out cards.

use kurbo::{Circle, Point, Shape};
use orgchart_hierarchy::{Hierarchy, RecordId};
use orgchart_layout::{Layout, NodeMetrics, TOGGLE_RADIUS};

/// What lies under a canvas point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas.
    Background,
    /// A card.
    Body(RecordId),
    /// The collapse toggle under a card that has children.
    Toggle(RecordId),
}

impl HitTarget {
    /// The node hit, if any.
    #[must_use]
    pub fn id(&self) -> Option<&RecordId> {
        match self {
            Self::Background => None,
            Self::Body(id) | Self::Toggle(id) => Some(id),
        }
    }
}

/// Finds the topmost card part under `point` (canvas space).
///
/// Later placements paint over earlier ones, so they are tested first.
#[must_use]
pub fn hit_test(
    tree: &Hierarchy,
    layout: &Layout,
    metrics: &NodeMetrics,
    point: Point,
) -> HitTarget {
    for placement in layout.placements().iter().rev() {
        let has_children = !tree.node(placement.node).children().all().is_empty();
        let toggle = Circle::new(metrics.toggle_center(placement.position), TOGGLE_RADIUS);
        if has_children && toggle.contains(point) {
            return HitTarget::Toggle(placement.id.clone());
        }
        if metrics.node_rect(placement.position).contains(point) {
            return HitTarget::Body(placement.id.clone());
        }
    }
    HitTarget::Background
}
