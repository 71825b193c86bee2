// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the pure transform transitions.
//!
//! Each iteration replays a full drag: a sequence of moves applied to the
//! same frozen base, the way a pointer handler drives the engine.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use framebox_transform::{Handle, Mode, Transform, TransformEngine};
use kurbo::{Point, Rect, Size, Vec2};

fn base() -> Transform {
    Transform {
        crop: Rect::from_origin_size((320.0, 180.0), (1280.0, 720.0)),
        screen_position: Point::new(64.0, 64.0),
        scale: 0.75,
        content_size: Size::new(1920.0, 1080.0),
    }
}

/// Deterministic zig-zag pointer path, long enough to hit the clamps.
fn deltas(len: usize) -> Vec<Vec2> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            Vec2::new((t * 7.0) % 1400.0 - 700.0, (t * 3.0) % 900.0 - 450.0)
        })
        .collect()
}

fn bench_drag_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/drag_handle");
    let engine = TransformEngine::default();
    let base = base();

    for len in [64_usize, 1_024] {
        let path = deltas(len);
        group.throughput(Throughput::Elements(len as u64));
        for mode in Mode::ALL {
            let id = BenchmarkId::new(mode.as_str(), len);
            group.bench_with_input(id, &path, |b, path| {
                b.iter(|| {
                    for (i, delta) in path.iter().enumerate() {
                        let handle = Handle::ALL[i % Handle::ALL.len()];
                        black_box(engine.drag_handle(mode, &base, *delta, Some(handle)));
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/pan");
    let engine = TransformEngine::default();
    let base = base();
    let path = deltas(1_024);
    group.throughput(Throughput::Elements(path.len() as u64));

    for mode in [Mode::Resize, Mode::Crop] {
        group.bench_with_input(BenchmarkId::from_parameter(mode.as_str()), &path, |b, path| {
            b.iter(|| {
                for delta in path {
                    black_box(engine.pan(mode, &base, *delta));
                }
            });
        });
    }

    group.finish();
}

fn bench_display_properties(c: &mut Criterion) {
    let engine = TransformEngine::default();
    let base = base();
    c.bench_function("transform/display_properties", |b| {
        b.iter(|| black_box(engine.display_properties(black_box(&base))));
    });
}

criterion_group!(
    benches,
    bench_drag_handle,
    bench_pan,
    bench_display_properties
);
criterion_main!(benches);
