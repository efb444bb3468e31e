// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration interpolation driven by host timestamps.

use kurbo::{Point, Vec2};

use crate::ViewTransform;

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    /// Value at `t` between `self` (0) and `other` (1).
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::lerp(self, other, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::lerp(self, other, t)
    }
}

impl Lerp for ViewTransform {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            translate: self.translate.lerp(other.translate, t),
            scale: Lerp::lerp(self.scale, other.scale, t),
        }
    }
}

/// Cubic ease-in-out over `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// An eased transition between two values.
///
/// The clock starts on the first call to [`Tween::advance`], so a tween can be
/// created while handling an event and picked up by the next animation frame.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_ms: u64,
    started_at: Option<u64>,
    current: T,
    done: bool,
}

impl<T: Lerp> Tween<T> {
    /// A transition from `from` to `to` lasting `duration_ms`.
    pub fn new(from: T, to: T, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            started_at: None,
            current: from,
            done: false,
        }
    }

    /// Steps the clock to `now_ms` and returns the value there.
    pub fn advance(&mut self, now_ms: u64) -> T {
        let start = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= self.duration_ms {
            self.current = self.to;
            self.done = true;
        } else {
            #[allow(
                clippy::cast_precision_loss,
                reason = "animation durations are far below 2^52 ms."
            )]
            let t = elapsed as f64 / self.duration_ms as f64;
            self.current = self.from.lerp(self.to, ease_cubic_in_out(t));
        }
        self.current
    }

    /// Restarts toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: T) {
        self.from = self.current;
        self.to = to;
        self.started_at = None;
        self.done = false;
    }

    /// Value as of the last [`Tween::advance`].
    pub fn current(&self) -> T {
        self.current
    }

    /// Start value.
    pub fn from(&self) -> T {
        self.from
    }

    /// End value.
    pub fn target(&self) -> T {
        self.to
    }

    /// Returns `true` once the end value has been reached.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_symmetric_and_pinned() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        let a = ease_cubic_in_out(0.25);
        let b = ease_cubic_in_out(0.75);
        assert!((a + b - 1.0).abs() < 1e-12, "{a} {b}");
    }

    #[test]
    fn clock_starts_on_first_advance() {
        let mut tween = Tween::new(0.0, 10.0, 100);
        assert_eq!(tween.advance(5_000), 0.0);
        assert_eq!(tween.advance(5_050), 5.0);
        assert!(!tween.is_done());
        assert_eq!(tween.advance(5_100), 10.0);
        assert!(tween.is_done());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tween = Tween::new(Point::ZERO, Point::new(3.0, 4.0), 0);
        assert_eq!(tween.advance(1), Point::new(3.0, 4.0));
        assert!(tween.is_done());
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut tween = Tween::new(0.0, 10.0, 100);
        tween.advance(0);
        tween.advance(50);
        tween.retarget(20.0);
        assert_eq!(tween.from(), 5.0);
        assert_eq!(tween.advance(1_000), 5.0);
        assert_eq!(tween.advance(1_100), 20.0);
    }
}
