// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Scene: the materialized, animated part of a chart.
//!
//! A [`Scene`] is a retained list of [`NodeElement`]s and [`LinkElement`]s
//! that a host paints each frame. It is updated in two ways:
//!
//! - [`Scene::reconcile`] diffs a culled [`orgchart_view::VisibleSet`] against
//!   what is materialized, by record id, and creates, refreshes or retires
//!   elements. [`UpdateKind`] selects animated (structural change) or
//!   instantaneous (pan/zoom) behavior.
//! - [`Scene::tick`] advances transitions to a host timestamp and drops
//!   elements whose exit animation has ended.
//!
//! Node content is produced by a caller closure and stored as an opaque `C`;
//! the scene never inspects it.
//!
//! ```rust
//! use kurbo::Rect;
//! use orgchart_hierarchy::{Hierarchy, Record};
//! use orgchart_layout::{Layout, NodeMetrics};
//! use orgchart_scene::{Scene, UpdateKind};
//! use orgchart_view::cull;
//!
//! let records = vec![Record::new("1", None, ()), Record::new("2", Some("1"), ())];
//! let mut tree = Hierarchy::build(&records).unwrap();
//! let metrics = NodeMetrics::default();
//! let layout = Layout::compute(&mut tree, &metrics);
//! let visible = cull(&layout, &metrics, Rect::new(-500.0, -500.0, 500.0, 500.0));
//!
//! let mut scene: Scene<String> = Scene::new(400);
//! scene.reconcile(&tree, &visible, UpdateKind::Viewport, |p| format!("card {}", p.id));
//! assert_eq!(scene.nodes().len(), 2);
//! assert_eq!(scene.node("2").unwrap().content(), "card 2");
//! assert!(!scene.is_animating());
//! ```

mod element;
mod scene;

pub use element::{
    CollapseGlyph, ElementFlags, LinkElement, LinkPose, NodeElement, NodePose,
};
pub use scene::{ReconcileStats, Scene, UpdateKind};
