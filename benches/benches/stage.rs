// Copyright 2026 the Framebox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for stage hit testing and pointer-driven box updates.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use framebox_interaction::{BoxKind, FrameBox, Stage};
use framebox_transform::{Handle, Mode, Transform, TransformEngine};
use kurbo::{Point, Size};

/// A stage with `count` boxes laid out on a loose grid.
fn populated_stage(count: usize) -> Stage {
    let mut stage = Stage::default();
    for i in 0..count {
        let col = (i % 32) as f64;
        let row = (i / 32) as f64;
        let transform = Transform {
            screen_position: Point::new(col * 90.0, row * 70.0),
            ..Transform::new(Size::new(160.0, 120.0))
        };
        stage.insert_box(FrameBox::from_transform(
            TransformEngine::default(),
            BoxKind::Image,
            transform,
        ));
    }
    stage
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage/hit_test");
    for count in [16_usize, 256, 2_048] {
        let stage = populated_stage(count);
        let probes: Vec<Point> = (0..64)
            .map(|i| Point::new(f64::from(i) * 45.0, f64::from(i % 16) * 35.0))
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &probes, |b, probes| {
            b.iter(|| {
                for probe in probes {
                    black_box(stage.hit_test(*probe));
                }
            });
        });
    }
    group.finish();
}

fn bench_pointer_session(c: &mut Criterion) {
    c.bench_function("frame_box/crop_session_256_moves", |b| {
        b.iter_batched(
            || {
                let mut frame_box = FrameBox::new(BoxKind::ScreenCapture, Size::new(1920.0, 1080.0));
                let _ = frame_box.set_mode(Mode::Crop);
                frame_box
            },
            |mut frame_box| {
                frame_box.pointer_down(Point::new(500.0, 500.0), Some(Handle::Nw));
                for i in 0..256_u32 {
                    let t = f64::from(i);
                    frame_box.pointer_move(Point::new(500.0 + t, 500.0 + t * 0.5));
                }
                black_box(frame_box.pointer_up());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_hit_test, bench_pointer_session);
criterion_main!(benches);
