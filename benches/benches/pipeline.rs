// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use orgchart::orgchart_hierarchy::Hierarchy;
use orgchart::orgchart_layout::Layout;
use orgchart::orgchart_view::cull;
use orgchart::{NodeMetrics, OrgChart, Record, ViewTransform};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// Random tree where each node hangs off one of the previous `window` nodes.
///
/// Small windows give deep narrow trees, large ones give wide bushy trees.
fn gen_records(count: usize, window: usize, seed: u64) -> Vec<Record<u32>> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    out.push(Record::new("n0", None, 0));
    for i in 1..count {
        let lo = i.saturating_sub(window);
        let parent = lo + rng.below(i - lo);
        out.push(Record::new(format!("n{i}"), Some(&format!("n{parent}")), i as u32));
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy");
    for &n in &[1_000usize, 10_000] {
        let records = gen_records(n, n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_n{n}"), |b| {
            b.iter(|| black_box(Hierarchy::build(&records).map(|t| t.len())));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let metrics = NodeMetrics::default();
    let mut group = c.benchmark_group("layout");
    for &(n, window) in &[(1_000usize, 1_000usize), (10_000, 10_000), (10_000, 8)] {
        let records = gen_records(n, window, 0xBADC_F00D_1234_5678);
        let Ok(tree) = Hierarchy::build(&records) else {
            continue;
        };
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("tidy_n{n}_w{window}"), |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| black_box(Layout::compute(&mut tree, &metrics).placements().len()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_cull(c: &mut Criterion) {
    let metrics = NodeMetrics::default();
    let size = Size::new(1_920.0, 1_080.0);
    let records = gen_records(10_000, 10_000, 0xC1A5_7E55_9999_ABCD);
    let Ok(mut tree) = Hierarchy::build(&records) else {
        return;
    };
    let layout = Layout::compute(&mut tree, &metrics);

    let mut group = c.benchmark_group("cull");
    group.throughput(Throughput::Elements(layout.placements().len() as u64));
    for &scale in &[1.0, 0.25] {
        let transform = ViewTransform::new(Vec2::new(960.0, 50.0), scale);
        let rect = transform.visible_rect(size, 300.0);
        group.bench_function(format!("visible_scale_{scale}"), |b| {
            b.iter(|| black_box(cull(&layout, &metrics, rect).nodes.len()));
        });
    }
    group.finish();
}

fn bench_chart(c: &mut Criterion) {
    let records = gen_records(5_000, 64, 0xFACE_FEED_CAFE_BABE);
    let mut group = c.benchmark_group("chart");
    group.bench_function("render_n5000", |b| {
        b.iter_batched(
            || records.clone(),
            |records| {
                let mut chart = OrgChart::builder(Size::new(1_920.0, 1_080.0), |r: &Record<u32>| r.payload)
                    .build();
                let _ = chart.render(records);
                black_box(chart.scene().nodes().len())
            },
            BatchSize::LargeInput,
        );
    });

    let mut chart =
        OrgChart::builder(Size::new(1_920.0, 1_080.0), |r: &Record<u32>| r.payload).build();
    if chart.render(records).is_err() {
        return;
    }
    chart.tick(0);
    chart.tick(1_000);
    group.bench_function("pan_frame_n5000", |b| {
        let mut step = 0_u32;
        b.iter(|| {
            step = step.wrapping_add(1);
            let dx = if step % 200 < 100 { -40.0 } else { 40.0 };
            chart.pan_by(Vec2::new(dx, 0.0));
            black_box(chart.scene().nodes().len())
        });
    });
    group.bench_function("zoom_frame_n5000", |b| {
        let mut step = 0_u32;
        b.iter(|| {
            step = step.wrapping_add(1);
            let factor = if step % 20 < 10 { 0.9 } else { 1.0 / 0.9 };
            chart.zoom_at(Point::new(960.0, 540.0), factor);
            black_box(chart.scene().nodes().len())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_layout, bench_cull, bench_chart);
criterion_main!(benches);
