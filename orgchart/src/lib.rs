// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart: a headless, virtualized, editable org chart engine.
//!
//! Give [`OrgChart`] a flat list of [`Record`]s, each naming its parent, and it
//! derives the tree, lays it out top-down, culls it to the viewport, and keeps
//! an animated [`Scene`] of the cards and links a host should paint. Users can
//! pan and zoom, collapse branches, and in [`Mode::Edit`] drag cards to
//! reparent or reorder them. Accepted edits are written back to the records
//! and reported through the data-change hook.
//!
//! The pipeline, one crate per stage:
//!
//! - [`orgchart_hierarchy`]: records → tree, with expand/collapse state.
//! - [`orgchart_layout`]: tidy tree positions and link geometry.
//! - [`orgchart_view`]: view transform, culling, camera animation.
//! - [`orgchart_scene`]: keyed reconciliation of the culled set.
//! - [`orgchart_gesture`]: hit testing, clicks, drag proposals.
//!
//! Data changes re-run the whole pipeline; view changes only re-cull and
//! reconcile. Nothing runs on a timer: the host calls [`OrgChart::tick`] each
//! frame while it returns `true`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use orgchart::{Mode, OrgChart, Record};
//!
//! let mut chart = OrgChart::builder(Size::new(1200.0, 800.0), |r: &Record<String>| {
//!     format!("<b>{}</b>", r.payload)
//! })
//! .build();
//!
//! chart
//!     .render(vec![
//!         Record::new("ceo", None, "Grace".to_owned()),
//!         Record::new("cto", Some("ceo"), "Ada".to_owned()),
//!         Record::new("cfo", Some("ceo"), "Emmy".to_owned()),
//!     ])
//!     .unwrap();
//! assert_eq!(chart.scene().nodes().len(), 3);
//! assert_eq!(chart.scene().node("cto").unwrap().content(), "<b>Ada</b>");
//!
//! // Collapse the root by clicking its toggle, then let the exit animation run.
//! let toggle = chart.metrics().toggle_center(Point::ZERO);
//! let screen = chart.transform().canvas_to_screen(toggle);
//! chart.pointer_down(screen);
//! chart.pointer_up(screen);
//! chart.tick(0);
//! assert!(!chart.tick(1_000));
//! assert_eq!(chart.scene().nodes().len(), 1);
//!
//! chart.set_mode(Mode::Edit);
//! assert_eq!(chart.mode(), Mode::Edit);
//! ```

mod chart;
mod config;
mod error;
mod input;
mod mutation;

pub use chart::{DragFeedback, Mode, OrgChart, OrgChartBuilder};
pub use config::ChartConfig;
pub use error::ChartError;
pub use mutation::apply_drop;

pub use orgchart_gesture::{DropIndicator, DropPosition, DropProposal, Ghost};
pub use orgchart_hierarchy::{MalformedHierarchyError, Record, RecordId};
pub use orgchart_layout::NodeMetrics;
pub use orgchart_scene::{CollapseGlyph, ElementFlags, NodeElement, Scene};
pub use orgchart_view::ViewTransform;

pub use orgchart_gesture;
pub use orgchart_hierarchy;
pub use orgchart_layout;
pub use orgchart_scene;
pub use orgchart_view;
