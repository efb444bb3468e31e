// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted session against the headless chart: load records from JSON,
//! expand a branch, move a card in edit mode, and print the edited records.
//!
//! The "host" here is a text dump of the scene after each step.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p orgchart_demos --example scripted_session`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use orgchart::{ChartConfig, Mode, OrgChart, Record};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Person {
    name: String,
    title: String,
}

const DATA: &str = r#"[
    { "id": "ceo", "parentId": null, "name": "Grace", "title": "CEO" },
    { "id": "cto", "parentId": "ceo", "name": "Ada", "title": "CTO" },
    { "id": "cfo", "parentId": "ceo", "name": "Emmy", "title": "CFO" },
    { "id": "eng", "parentId": "cto", "name": "Alan", "title": "Engineering", "relatedIds": ["fin"] },
    { "id": "ops", "parentId": "cto", "name": "Barbara", "title": "Operations" },
    { "id": "fin", "parentId": "cfo", "name": "Kurt", "title": "Finance" }
]"#;

const CONFIG: &str = r#"{ "defaultExpandDepth": 1, "animationDurationMs": 200 }"#;

fn dump<P>(label: &str, chart: &OrgChart<P, String>) {
    println!("\n== {label} ==");
    let t = chart.transform();
    println!(
        "view: translate=({:.1}, {:.1}) scale={:.2}",
        t.translate.x, t.translate.y, t.scale
    );
    for el in chart.scene().nodes() {
        let pose = el.pose();
        let glyph = el.glyph().symbol().map(String::from).unwrap_or_default();
        println!(
            "  {:<4} {:<24} at ({:>7.1}, {:>6.1}) {glyph}{}",
            el.id(),
            el.content(),
            pose.position.x,
            pose.position.y,
            if el.flags().is_empty() {
                String::new()
            } else {
                format!(" {:?}", el.flags())
            }
        );
    }
    println!(
        "  links: {}  related: {}",
        chart.scene().links().len(),
        chart.scene().related().len()
    );
}

/// Plays frames until the chart settles.
fn settle<P>(chart: &mut OrgChart<P, String>, clock: &mut u64) {
    while chart.tick(*clock) {
        *clock += 16;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let records: Vec<Record<Person>> = serde_json::from_str(DATA)?;
    let config: ChartConfig = serde_json::from_str(CONFIG)?;

    let edits = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&edits);
    let mut chart = OrgChart::builder(Size::new(1_280.0, 720.0), |r: &Record<Person>| {
        format!("{} ({})", r.payload.name, r.payload.title)
    })
    .config(config)
    .on_node_click(|id| println!("  clicked {id}"))
    .on_data_change(move |records: &[Record<Person>]| {
        *sink.borrow_mut() = Some(records.to_vec());
    })
    .build();

    let mut clock = 0;
    chart.render(records)?;
    settle(&mut chart, &mut clock);
    dump("first render", &chart);

    chart.toggle("cto")?;
    chart.toggle("cfo")?;
    settle(&mut chart, &mut clock);
    dump("expanded both branches", &chart);

    // Click the Finance card.
    let fin = chart.hierarchy().and_then(|t| t.find("fin"));
    let fin = fin.and_then(|idx| chart.layout()?.placement(idx)).map(|p| p.position);
    if let Some(fin) = fin {
        let at = chart.transform().canvas_to_screen(fin + Vec2::new(0.0, 50.0));
        chart.pointer_down(at);
        chart.pointer_up(at);
    }
    dump("after clicking Finance", &chart);

    // Drag Operations under the CFO.
    chart.set_mode(Mode::Edit);
    let anchor = |chart: &OrgChart<Person, String>, id: &str| -> Option<Point> {
        let tree = chart.hierarchy()?;
        chart.layout()?.placement(tree.find(id)?).map(|p| p.position)
    };
    if let (Some(ops), Some(cfo)) = (anchor(&chart, "ops"), anchor(&chart, "cfo")) {
        let t = chart.transform();
        chart.pointer_down(t.canvas_to_screen(ops + Vec2::new(0.0, 50.0)));
        chart.pointer_move(t.canvas_to_screen(cfo + Vec2::new(0.0, 50.0)));
        chart.pointer_up(t.canvas_to_screen(cfo + Vec2::new(0.0, 50.0)));
    }
    settle(&mut chart, &mut clock);
    dump("moved Operations under the CFO", &chart);

    chart.fit_to_screen()?;
    settle(&mut chart, &mut clock);
    dump("fit to screen", &chart);

    if let Some(records) = edits.borrow().as_ref() {
        println!("\n== edited records ==");
        println!("{}", serde_json::to_string_pretty(records)?);
    }
    Ok(())
}
