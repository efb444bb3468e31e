// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Layout: top-down tidy tree placement.
//!
//! [`Layout::compute`] assigns every visible node of an
//! [`orgchart_hierarchy::Hierarchy`] a card anchor:
//!
//! - Horizontally, a tidy tree in linear time: siblings sit one column apart
//!   (a column is [`NodeMetrics::width`] plus [`NodeMetrics::spacing_x`]),
//!   neighboring subtrees of different parents sit two columns apart, and each
//!   parent is centered over its visible children. The root is at `x = 0`.
//! - Vertically, a fixed row per depth: `y = depth × (height + spacing_y)`, so
//!   rows form uniform bands whatever the subtree shapes.
//!
//! The anchor is the top-center of a card; [`NodeMetrics::node_rect`] gives the
//! card box. Alongside the placements, a layout lists the parent → child
//! [`TreeLink`]s and the [`RelatedLink`]s between laid-out nodes; use
//! [`elbow_path`] to turn either into drawable geometry.
//!
//! Collapsed subtrees are skipped entirely. Only one layout exists: top-down.
//!
//! ```rust
//! use kurbo::Point;
//! use orgchart_hierarchy::{Hierarchy, Record};
//! use orgchart_layout::{Layout, NodeMetrics};
//!
//! let records = vec![
//!     Record::new("1", None, ()),
//!     Record::new("2", Some("1"), ()),
//!     Record::new("3", Some("1"), ()),
//! ];
//! let mut tree = Hierarchy::build(&records).unwrap();
//! let layout = Layout::compute(&mut tree, &NodeMetrics::default());
//!
//! let three = tree.find("3").unwrap();
//! assert_eq!(layout.placement(three).unwrap().position, Point::new(135.0, 180.0));
//! assert_eq!(layout.links().len(), 2);
//! ```

mod layout;
mod metrics;
mod path;
mod tidy;

pub use layout::{Layout, Placement, RelatedLink, TreeLink};
pub use metrics::{NodeMetrics, TOGGLE_OFFSET, TOGGLE_RADIUS};
pub use path::elbow_path;

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_hierarchy::{Hierarchy, Record};
    use proptest::prelude::*;

    fn arb_tree() -> impl Strategy<Value = Vec<Record<()>>> {
        (1_usize..60)
            .prop_flat_map(|n| {
                let parents: Vec<BoxedStrategy<usize>> =
                    (1..n).map(|i| (0..i).boxed()).collect();
                (Just(n), parents)
            })
            .prop_map(|(n, parents)| {
                (0..n)
                    .map(|i| {
                        let parent = (i > 0).then(|| format!("n{}", parents[i - 1]));
                        Record::new(format!("n{i}"), parent.as_deref(), ())
                    })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn cards_in_a_row_never_overlap(records in arb_tree()) {
            let mut tree = Hierarchy::build(&records).unwrap();
            let metrics = NodeMetrics::default();
            let layout = Layout::compute(&mut tree, &metrics);
            prop_assert_eq!(layout.placements().len(), records.len());

            let mut rows: Vec<Vec<f64>> = Vec::new();
            for p in layout.placements() {
                let depth = tree.node(p.node).depth();
                if rows.len() <= depth {
                    rows.resize(depth + 1, Vec::new());
                }
                rows[depth].push(p.position.x);
            }
            for row in &rows {
                // Breadth-first order lists each row left to right.
                for pair in row.windows(2) {
                    prop_assert!(pair[1] - pair[0] >= metrics.column_pitch() - 1e-6);
                }
            }
        }

        #[test]
        fn parents_are_centered_over_children(records in arb_tree()) {
            let mut tree = Hierarchy::build(&records).unwrap();
            let layout = Layout::compute(&mut tree, &NodeMetrics::default());
            for p in layout.placements() {
                let children = tree.node(p.node).children().visible();
                if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
                    let left = layout.placement(first).unwrap().position.x;
                    let right = layout.placement(last).unwrap().position.x;
                    prop_assert!((p.position.x - (left + right) / 2.0).abs() < 1e-6);
                }
            }
        }
    }
}
