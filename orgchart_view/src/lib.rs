// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart View: what part of the chart is on screen, and how it moves.
//!
//! - [`ViewTransform`]: the single pan/zoom transform, canvas → screen.
//! - [`cull`]: a pure filter that picks the [`orgchart_layout::Layout`] nodes
//!   and links touching the visible rectangle. A screen-pixel buffer around the
//!   container avoids pop-in; use a larger one while nodes animate after a
//!   structural change and a smaller one for plain scrolling.
//! - [`Camera`]: owns the transform. Gestures apply immediately; fit, reset and
//!   center moves are [`Tween`]s advanced by [`Camera::tick`].
//!
//! Time is supplied by the host as millisecond timestamps. Nothing here reads a
//! clock or schedules frames.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use orgchart_hierarchy::{Hierarchy, Record};
//! use orgchart_layout::{Layout, NodeMetrics};
//! use orgchart_view::{Camera, CameraTick, cull};
//!
//! let records = vec![Record::new("1", None, ()), Record::new("2", Some("1"), ())];
//! let mut tree = Hierarchy::build(&records).unwrap();
//! let metrics = NodeMetrics::default();
//! let layout = Layout::compute(&mut tree, &metrics);
//!
//! let mut camera = Camera::new(Size::new(800.0, 600.0));
//! camera.reset(Point::ZERO, false);
//! let rect = camera.transform().visible_rect(camera.size(), 300.0);
//! assert_eq!(cull(&layout, &metrics, rect).nodes.len(), 2);
//!
//! camera.fit(layout.bounds(&metrics).unwrap());
//! assert_eq!(camera.tick(0), CameraTick::Moved);
//! assert_eq!(camera.tick(750), CameraTick::Settled);
//! ```

mod anim;
mod camera;
mod cull;
mod transform;

pub use anim::{Lerp, Tween, ease_cubic_in_out};
pub use camera::{Camera, CameraTick};
pub use cull::{VisibleSet, cull, intersects};
pub use transform::ViewTransform;
