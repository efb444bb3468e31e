// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Gesture: pointer input over a laid-out chart.
//!
//! All positions are in canvas space; convert screen input with
//! `ViewTransform::screen_to_canvas` from `orgchart_view` first.
//!
//! - [`hit_test`] resolves a point to a card body, a collapse toggle, or the
//!   background.
//! - [`ClickState`] tells clicks apart from drags and pans.
//! - [`DragController`] follows a drag and keeps a [`DropProposal`] (reparent
//!   or reorder) with matching preview geometry. It never edits anything; the
//!   proposal returned by [`DragController::end`] is applied by the caller.
//!
//! ```rust
//! use kurbo::Point;
//! use orgchart_gesture::{DragController, DropProposal};
//! use orgchart_hierarchy::{Hierarchy, Record};
//! use orgchart_layout::{Layout, NodeMetrics};
//!
//! let records = vec![
//!     Record::new("1", None, ()),
//!     Record::new("2", Some("1"), ()),
//!     Record::new("3", Some("1"), ()),
//! ];
//! let mut tree = Hierarchy::build(&records).unwrap();
//! let metrics = NodeMetrics::default();
//! let layout = Layout::compute(&mut tree, &metrics);
//!
//! let three = tree.find("3").unwrap();
//! let grab = layout.placement(three).unwrap().position;
//! let mut drag = DragController::new();
//! drag.start(&layout, three, grab, ()).unwrap();
//! // Over the middle of card "2".
//! drag.update(&tree, &layout, &metrics, Point::new(-135.0, 230.0));
//! assert_eq!(drag.end(), Some(DropProposal::Reparent { target: "2".into() }));
//! ```

mod click;
mod drag;
mod hit;

pub use click::{ClickResult, ClickState, Press};
pub use drag::{DragController, DragError, DropIndicator, DropPosition, DropProposal, Ghost};
pub use hit::{HitTarget, hit_test};
