// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fanline::{Connection, Host, ListenerId, Timeline, TimelineProps};
use fanline_scene_ref::RecordingScene;
use kurbo::{Point, Size, Vec2};

#[derive(Debug)]
struct Element;

impl Host for Element {
    fn measure(&self) -> Size {
        Size::new(1200.0, 500.0)
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        ListenerId(0)
    }

    fn remove_resize_listener(&mut self, _: ListenerId) {}
}

fn mounted(count: usize) -> Timeline<u32, RecordingScene, Element> {
    let connections = (0..count)
        .map(|i| {
            let start = (i as f64 * 37.0) % 100.0;
            Connection::new(i as u32, start, [(i % 90) as f64, ((i * 7) % 90) as f64])
        })
        .collect();
    Timeline::mount(
        TimelineProps::new(connections),
        RecordingScene::default(),
        Element,
    )
    .unwrap()
}

fn bench_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline/interaction");

    for count in [64usize, 512, 2_048] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(BenchmarkId::new("wheel", count), |b| {
            let mut timeline = mounted(count);
            let mut direction = 1.0;
            b.iter(|| {
                let range = timeline.visible_range().unwrap_or_default();
                if range.b >= 100.0 {
                    direction = -1.0;
                } else if range.a <= 0.0 {
                    direction = 1.0;
                }
                timeline.wheel(Vec2::new(direction * 40.0, 0.0));
                black_box(timeline.visible_range());
                timeline.scene_mut().clear_events();
            });
        });

        group.bench_function(BenchmarkId::new("hover_sweep", count), |b| {
            let mut timeline = mounted(count);
            timeline.scroll_view(2_400.0);
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 7.0) % 1200.0;
                timeline.pointer_move(Point::new(x, 65.0));
                black_box(timeline.hovered().copied());
                timeline.scene_mut().clear_events();
            });
        });

        group.bench_function(BenchmarkId::new("relayout", count), |b| {
            let mut timeline = mounted(count);
            let mut now = 0;
            b.iter(|| {
                timeline.on_resize(now);
                now += 500;
                timeline.tick(now);
                timeline.scene_mut().clear_events();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interaction);
criterion_main!(benches);
