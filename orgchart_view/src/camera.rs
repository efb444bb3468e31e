// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom controller.

use kurbo::{Point, Rect, Size, Vec2};

use crate::{Tween, ViewTransform};

/// Largest share of the container a fitted chart may cover.
const FIT_FILL: f64 = 0.9;

/// What a [`Camera::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CameraTick {
    /// No move in flight.
    Idle,
    /// The transform changed and the move continues.
    Moved,
    /// The move reached its target on this tick.
    Settled,
}

/// Owns the view transform and animates it between targets.
///
/// Gesture input ([`Camera::pan_by`], [`Camera::zoom_at`]) applies immediately
/// and cancels any move in flight. Programmatic moves ([`Camera::fit`],
/// [`Camera::reset`], [`Camera::center_on`]) animate over
/// [`Camera::duration_ms`] unless told otherwise. Starting a move while
/// another is running continues from the current interpolated transform.
#[derive(Clone, Debug)]
pub struct Camera {
    transform: ViewTransform,
    size: Size,
    min_scale: f64,
    max_scale: f64,
    duration_ms: u64,
    top_margin: f64,
    tween: Option<Tween<ViewTransform>>,
}

impl Camera {
    /// A camera for a container of `size` with default settings.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            size,
            min_scale: 0.1,
            max_scale: 2.0,
            duration_ms: 750,
            top_margin: 50.0,
            tween: None,
        }
    }

    /// Sets the allowed zoom range.
    #[must_use]
    pub fn with_scale_extent(mut self, min: f64, max: f64) -> Self {
        self.min_scale = min.min(max);
        self.max_scale = max.max(min);
        self
    }

    /// Sets how long programmatic moves take.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the gap above the root after [`Camera::reset`].
    #[must_use]
    pub fn with_top_margin(mut self, top_margin: f64) -> Self {
        self.top_margin = top_margin;
        self
    }

    /// The transform as of the last tick or gesture.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Where the camera is headed: the tween target, or the current transform.
    #[must_use]
    pub fn target(&self) -> ViewTransform {
        self.tween.as_ref().map_or(self.transform, Tween::target)
    }

    /// Container size in screen pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Updates the container size. The transform is left alone.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Duration of programmatic moves.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns `true` while a programmatic move is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Clamps `scale` into the zoom range.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Transform that centers `bounds` in the container, shrinking it to fit
    /// if needed but never enlarging past 1.
    #[must_use]
    pub fn fit_transform(&self, bounds: Rect) -> ViewTransform {
        let ratio = (bounds.width() / self.size.width).max(bounds.height() / self.size.height);
        let scale = self.clamp_scale((FIT_FILL / ratio).min(1.0));
        let center = bounds.center().to_vec2();
        let translate = self.size.to_vec2() / 2.0 - center * scale;
        ViewTransform::new(translate, scale)
    }

    /// Transform that puts `root` at the horizontal center, `top_margin` below
    /// the top edge, at scale 1.
    #[must_use]
    pub fn reset_transform(&self, root: Point) -> ViewTransform {
        let translate = Vec2::new(self.size.width / 2.0 - root.x, self.top_margin - root.y);
        ViewTransform::new(translate, 1.0)
    }

    /// Transform that puts `point` at the container center at scale 1.
    #[must_use]
    pub fn center_transform(&self, point: Point) -> ViewTransform {
        ViewTransform::new(self.size.to_vec2() / 2.0 - point.to_vec2(), 1.0)
    }

    /// Animates to show all of `bounds`.
    pub fn fit(&mut self, bounds: Rect) {
        let target = self.fit_transform(bounds);
        self.animate_to(target);
    }

    /// Moves so the root sits at the top center, optionally animated.
    pub fn reset(&mut self, root: Point, animate: bool) {
        let target = self.reset_transform(root);
        if animate {
            self.animate_to(target);
        } else {
            self.jump_to(target);
        }
    }

    /// Animates to put `point` in the middle of the container.
    pub fn center_on(&mut self, point: Point) {
        let target = self.center_transform(point);
        self.animate_to(target);
    }

    /// Starts, or retargets, an animated move.
    pub fn animate_to(&mut self, target: ViewTransform) {
        match &mut self.tween {
            Some(tween) => tween.retarget(target),
            None => {
                self.tween = Some(Tween::new(self.transform, target, self.duration_ms));
            }
        }
    }

    /// Sets the transform immediately, cancelling any move.
    pub fn jump_to(&mut self, target: ViewTransform) {
        self.tween = None;
        self.transform = target;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        let mut next = self.transform;
        next.translate += delta;
        self.jump_to(next);
    }

    /// Zooms by `factor` keeping the canvas point under `anchor` (screen space) fixed.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        let current = self.transform;
        let scale = self.clamp_scale(current.scale * factor);
        let pinned = current.screen_to_canvas(anchor);
        let translate = anchor.to_vec2() - pinned.to_vec2() * scale;
        self.jump_to(ViewTransform::new(translate, scale));
    }

    /// Advances a move in flight to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> CameraTick {
        let Some(tween) = &mut self.tween else {
            return CameraTick::Idle;
        };
        self.transform = tween.advance(now_ms);
        if tween.is_done() {
            self.tween = None;
            CameraTick::Settled
        } else {
            CameraTick::Moved
        }
    }
}
