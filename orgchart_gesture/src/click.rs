// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition for a single pointer.
//!
//! A press becomes a click when the release lands on the same target and the
//! pointer never strayed past the distance threshold in between. Anything
//! else is a drag or a pan, and is suppressed.
//!
//! ```
//! use kurbo::Point;
//! use orgchart_gesture::{ClickResult, ClickState};
//!
//! let mut state: ClickState<u32> = ClickState::new(5.0);
//! state.on_down(42, Point::new(10.0, 20.0));
//! assert!(state.on_move(Point::new(12.0, 21.0)).is_none());
//! assert_eq!(state.on_up(&42, Point::new(12.0, 21.0)), ClickResult::Click(42));
//!
//! state.on_down(42, Point::new(10.0, 20.0));
//! assert_eq!(state.on_move(Point::new(40.0, 20.0)), Some(42));
//! assert_eq!(state.on_up(&42, Point::new(10.0, 20.0)), ClickResult::Suppressed(Some(42)));
//! ```

use kurbo::Point;

/// State of the active press.
#[derive(Clone, Debug)]
pub struct Press<K> {
    /// Target under the pointer at press time.
    pub target: K,
    /// Pointer position at press time.
    pub down_position: Point,
    /// True once the pointer moved beyond the threshold.
    pub distance_exceeded: bool,
}

/// Outcome of a release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickResult<K> {
    /// A click on the press target.
    Click(K),
    /// No click; carries the press target if there was a press.
    Suppressed(Option<K>),
}

/// Press/release tracker.
#[derive(Clone, Debug)]
pub struct ClickState<K> {
    press: Option<Press<K>>,
    /// Pointer travel beyond which a press no longer counts as a click.
    pub threshold: f64,
}

impl<K: PartialEq + Clone> ClickState<K> {
    /// Creates a tracker with the given travel threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            press: None,
            threshold,
        }
    }

    /// Records a press, replacing any earlier one.
    pub fn on_down(&mut self, target: K, position: Point) {
        self.press = Some(Press {
            target,
            down_position: position,
            distance_exceeded: false,
        });
    }

    /// Tracks pointer travel.
    ///
    /// Returns the press target the first time the threshold is exceeded.
    pub fn on_move(&mut self, position: Point) -> Option<K> {
        let press = self.press.as_mut()?;
        if press.distance_exceeded || press.down_position.distance(position) <= self.threshold {
            return None;
        }
        press.distance_exceeded = true;
        Some(press.target.clone())
    }

    /// Ends the press.
    pub fn on_up(&mut self, current_target: &K, position: Point) -> ClickResult<K> {
        let Some(press) = self.press.take() else {
            return ClickResult::Suppressed(None);
        };
        let moved = press.distance_exceeded
            || press.down_position.distance(position) > self.threshold;
        if moved || press.target != *current_target {
            return ClickResult::Suppressed(Some(press.target));
        }
        ClickResult::Click(press.target)
    }

    /// Drops the active press. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }

    /// Returns `true` while a press is active.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// The active press.
    pub fn press(&self) -> Option<&Press<K>> {
        self.press.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_elsewhere_is_not_a_click() {
        let mut state = ClickState::new(5.0);
        state.on_down('a', Point::ZERO);
        assert_eq!(
            state.on_up(&'b', Point::new(1.0, 0.0)),
            ClickResult::Suppressed(Some('a'))
        );
    }

    #[test]
    fn travel_on_release_counts() {
        let mut state = ClickState::new(5.0);
        state.on_down('a', Point::ZERO);
        assert_eq!(
            state.on_up(&'a', Point::new(6.0, 0.0)),
            ClickResult::Suppressed(Some('a'))
        );
        state.on_down('a', Point::ZERO);
        assert_eq!(state.on_up(&'a', Point::new(3.0, 4.0)), ClickResult::Click('a'));
    }

    #[test]
    fn threshold_is_reported_once() {
        let mut state = ClickState::new(5.0);
        state.on_down('a', Point::ZERO);
        assert_eq!(state.on_move(Point::new(10.0, 0.0)), Some('a'));
        assert_eq!(state.on_move(Point::new(20.0, 0.0)), None);
        // Coming back does not restore the click.
        assert_eq!(
            state.on_up(&'a', Point::ZERO),
            ClickResult::Suppressed(Some('a'))
        );
    }

    #[test]
    fn up_without_down_and_cancel() {
        let mut state: ClickState<char> = ClickState::new(5.0);
        assert_eq!(state.on_up(&'a', Point::ZERO), ClickResult::Suppressed(None));
        state.on_down('a', Point::ZERO);
        assert!(state.is_pressed());
        assert!(state.cancel());
        assert!(!state.cancel());
        assert_eq!(state.on_move(Point::new(50.0, 0.0)), None);
    }
}
