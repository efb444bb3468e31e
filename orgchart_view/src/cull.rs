// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling over a computed layout.

use kurbo::{Point, Rect};
use orgchart_layout::{Layout, NodeMetrics, Placement, RelatedLink, TreeLink};

/// The part of a layout worth materializing.
#[derive(Clone, Debug, Default)]
pub struct VisibleSet<'a> {
    /// Nodes whose card box touches the rectangle, in layout order.
    pub nodes: Vec<&'a Placement>,
    /// Tree links with at least one end visible.
    pub links: Vec<&'a TreeLink>,
    /// Related links whose source is visible.
    pub related: Vec<&'a RelatedLink>,
}

impl VisibleSet<'_> {
    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty() && self.related.is_empty()
    }
}

/// Closed-interval overlap test; boxes that merely touch count as visible.
#[must_use]
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Selects everything in `layout` that touches `rect` (canvas space).
///
/// Get `rect` from [`ViewTransform::visible_rect`](crate::ViewTransform::visible_rect).
/// The filter never looks at expand state or previous results.
#[must_use]
pub fn cull<'a>(layout: &'a Layout, metrics: &NodeMetrics, rect: Rect) -> VisibleSet<'a> {
    let shown = |p: Point| intersects(metrics.node_rect(p), rect);
    VisibleSet {
        nodes: layout
            .placements()
            .iter()
            .filter(|p| shown(p.position))
            .collect(),
        links: layout
            .links()
            .iter()
            .filter(|l| shown(l.source_position) || shown(l.target_position))
            .collect(),
        related: layout
            .related()
            .iter()
            .filter(|l| shown(l.source_position))
            .collect(),
    }
}
