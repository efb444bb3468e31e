// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link geometry.

use kurbo::{BezPath, Point};

/// Orthogonal elbow from the bottom of the source card to the top of the target card.
///
/// Both points are card anchors (top-center). The path drops from the source's
/// bottom edge to the midpoint row, runs across, and drops into the target.
#[must_use]
pub fn elbow_path(source: Point, target: Point, node_height: f64) -> BezPath {
    let start_y = source.y + node_height;
    let mid_y = (start_y + target.y) / 2.0;
    let mut path = BezPath::new();
    path.move_to((source.x, start_y));
    path.line_to((source.x, mid_y));
    path.line_to((target.x, mid_y));
    path.line_to(target);
    path
}
