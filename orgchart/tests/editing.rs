// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random drag sessions never corrupt the records.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use orgchart::orgchart_hierarchy::Hierarchy;
use orgchart::{Mode, OrgChart, Record};
use proptest::prelude::*;

/// Random well-formed record lists: every node's parent precedes it.
fn arb_records() -> impl Strategy<Value = Vec<Record<usize>>> {
    (2_usize..16)
        .prop_flat_map(|n| {
            let parents: Vec<BoxedStrategy<usize>> = (1..n).map(|i| (0..i).boxed()).collect();
            (Just(n), parents)
        })
        .prop_map(|(n, parents)| {
            (0..n)
                .map(|i| {
                    let parent = (i > 0).then(|| format!("n{}", parents[i - 1]));
                    Record::new(format!("n{i}"), parent.as_deref(), i)
                })
                .collect()
        })
}

/// A drag: which record to grab and where to drop, in canvas units.
fn arb_drags() -> impl Strategy<Value = Vec<(prop::sample::Index, f64, f64)>> {
    prop::collection::vec(
        (any::<prop::sample::Index>(), -1_500.0..1_500.0_f64, -50.0..1_000.0_f64),
        1..12,
    )
}

proptest! {
    #[test]
    fn drags_keep_one_acyclic_tree(records in arb_records(), drags in arb_drags()) {
        let changes = Rc::new(RefCell::new(0_usize));
        let sink = Rc::clone(&changes);
        let mut chart = OrgChart::builder(Size::new(1_000.0, 800.0), |r: &Record<usize>| r.payload)
            .on_data_change(move |_| *sink.borrow_mut() += 1)
            .build();
        chart.render(records.clone()).unwrap();
        chart.set_mode(Mode::Edit);

        let mut applied = 0;
        for (pick, x, y) in drags {
            let id = records[pick.index(records.len())].id.clone();
            let Some(anchor) = chart
                .hierarchy()
                .and_then(|t| t.find(id.as_str()))
                .and_then(|idx| chart.layout()?.placement(idx))
                .map(|p| p.position)
            else {
                continue;
            };
            let before = chart.records().to_vec();
            let transform = chart.transform();
            let grab = transform.canvas_to_screen(anchor + Vec2::new(0.0, 1.0));
            chart.pointer_down(grab);
            chart.pointer_move(transform.canvas_to_screen(Point::new(x, y)));
            chart.pointer_up(transform.canvas_to_screen(Point::new(x, y)));
            if chart.records() != before.as_slice() {
                applied += 1;
            }

            let tree = Hierarchy::build(chart.records());
            prop_assert!(tree.is_ok(), "{:?}", tree.err());
            prop_assert_eq!(chart.records().len(), records.len());
            let root = chart.records().iter().find(|r| r.is_root()).map(|r| r.id.clone());
            prop_assert_eq!(root, Some(records[0].id.clone()));
        }
        prop_assert_eq!(*changes.borrow(), applied);
    }
}
