// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node card dimensions and spacing.

use kurbo::{Point, Rect, Size};

/// Size of one node card and the gaps between cards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeMetrics {
    /// Card width.
    pub width: f64,
    /// Card height.
    pub height: f64,
    /// Horizontal gap between neighboring siblings.
    pub spacing_x: f64,
    /// Vertical gap between rows.
    pub spacing_y: f64,
}

impl Default for NodeMetrics {
    fn default() -> Self {
        Self {
            width: 220.0,
            height: 100.0,
            spacing_x: 50.0,
            spacing_y: 80.0,
        }
    }
}

impl NodeMetrics {
    /// Horizontal distance between neighboring sibling centers.
    #[must_use]
    pub fn column_pitch(&self) -> f64 {
        self.width + self.spacing_x
    }

    /// Vertical distance between consecutive rows.
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.height + self.spacing_y
    }

    /// Card size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Card box for a node at `position`: centered horizontally, hanging down from `y`.
    #[must_use]
    pub fn node_rect(&self, position: Point) -> Rect {
        let half = self.width / 2.0;
        Rect::new(
            position.x - half,
            position.y,
            position.x + half,
            position.y + self.height,
        )
    }

    /// Center of the collapse toggle drawn under a node at `position`.
    #[must_use]
    pub fn toggle_center(&self, position: Point) -> Point {
        Point::new(position.x, position.y + self.height + TOGGLE_OFFSET)
    }
}

/// Gap between a card's bottom edge and the center of its collapse toggle.
pub const TOGGLE_OFFSET: f64 = 10.0;

/// Radius of the collapse toggle.
pub const TOGGLE_RADIUS: f64 = 8.0;
