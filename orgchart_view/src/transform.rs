// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom transform between canvas and screen space.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform scale followed by a translation: `screen = canvas × scale + translate`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    /// Screen-space offset of the canvas origin.
    pub translate: Vec2,
    /// Zoom factor.
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// No pan, no zoom.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform.
    #[must_use]
    pub const fn new(translate: Vec2, scale: f64) -> Self {
        Self { translate, scale }
    }

    /// The equivalent affine map, for hosts that paint with one.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Maps a canvas point to the screen.
    #[must_use]
    pub fn canvas_to_screen(self, p: Point) -> Point {
        (p.to_vec2() * self.scale + self.translate).to_point()
    }

    /// Maps a screen point to the canvas.
    #[must_use]
    pub fn screen_to_canvas(self, p: Point) -> Point {
        ((p.to_vec2() - self.translate) / self.scale).to_point()
    }

    /// Canvas-space rectangle shown in a container of `size`, grown by
    /// `buffer` screen pixels on every side.
    #[must_use]
    pub fn visible_rect(self, size: Size, buffer: f64) -> Rect {
        let k = self.scale;
        let t = self.translate;
        Rect::new(
            (-t.x - buffer) / k,
            (-t.y - buffer) / k,
            (size.width - t.x + buffer) / k,
            (size.height - t.y + buffer) / k,
        )
    }
}
