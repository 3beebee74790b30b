// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use fanline::ShapeGraph;
use fanline_geometry::{Connection, HitParams, ShapeMetrics};
use fanline_scene_ref::{EntryHandle, RecordingScene};
use fanline_view::TimelineViewport;
use kurbo::{Point, Size};

fn connections(count: usize) -> Vec<Connection<u32>> {
    (0..count)
        .map(|i| {
            let start = (i as f64 * 37.0) % 100.0;
            let ends = [(i % 90) as f64, ((i * 7) % 90) as f64, ((i * 13) % 90) as f64];
            Connection::new(i as u32, start, ends)
        })
        .collect()
}

fn viewport() -> TimelineViewport {
    TimelineViewport::new(Size::new(1200.0, 500.0), 25.0).unwrap()
}

fn bench_construct_vs_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes/redraw");
    let metrics = ShapeMetrics::default();

    // Scrolling goes through update; only structural changes pay for construction.
    for count in [64usize, 512, 4_096] {
        let data = connections(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("construct", count), &data, |b, data| {
            let viewport = viewport();
            b.iter_batched(
                RecordingScene::default,
                |mut scene| {
                    let graph: ShapeGraph<u32, EntryHandle> =
                        ShapeGraph::construct(data, &viewport, &metrics, &mut scene);
                    black_box((graph, scene));
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("update", count), &data, |b, data| {
            let mut viewport = viewport();
            let mut scene = RecordingScene::default();
            let mut graph = ShapeGraph::construct(data, &viewport, &metrics, &mut scene);
            let mut scroll = 0.0;
            b.iter(|| {
                scroll = (scroll + 37.0) % viewport.max_scroll_left();
                viewport.scroll_view(scroll);
                graph.update_all(&viewport, &metrics, &mut scene);
                scene.clear_events();
            });
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes/hit_test");
    let metrics = ShapeMetrics::default();
    let params = HitParams::default();

    for count in [64usize, 512, 4_096] {
        let data = connections(count);
        let mut viewport = viewport();
        viewport.scroll_view(1_800.0);
        let mut scene = RecordingScene::default();
        let graph = ShapeGraph::construct(&data, &viewport, &metrics, &mut scene);

        let probes: Vec<Point> = (0..64)
            .map(|i| Point::new(1_800.0 + f64::from(i) * 18.0, 60.0 + f64::from(i) * 5.0))
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));

        group.bench_with_input(BenchmarkId::new("probe", count), &probes, |b, probes| {
            b.iter(|| {
                let hits = probes
                    .iter()
                    .filter(|pt| graph.hit_test(**pt, &params).is_some())
                    .count();
                black_box(hits);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construct_vs_update, bench_hit_test);
criterion_main!(benches);
