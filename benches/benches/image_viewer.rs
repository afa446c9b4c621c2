// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_image_viewer`: the per-frame tick and the pan
//! update path that runs on every touch move.

use core::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_image_viewer::{ImageViewer, Transform};

const VIEWPORT: Size = Size::new(1080.0, 2340.0);
const INTRINSIC: Size = Size::new(4032.0, 3024.0);
const FRAME: Duration = Duration::from_micros(16_667);

fn viewer_at(initial: Transform) -> ImageViewer<u32> {
    let mut viewer = ImageViewer::new(0, VIEWPORT, initial, ());
    viewer.set_intrinsic_size(INTRINSIC);
    viewer
}

fn bench_image_viewer(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_viewer");

    for updates in [16_u32, 256] {
        group.bench_with_input(
            BenchmarkId::new("pan_updates", updates),
            &updates,
            |b, &updates| {
                b.iter_batched(
                    || viewer_at(Transform::new(2.5, 0.0, 0.0)),
                    |mut viewer| {
                        viewer.pan_start();
                        for i in 0..updates {
                            let t = f64::from(i);
                            viewer.pan_update(Vec2::new(t * 7.0 - 900.0, 450.0 - t * 3.0));
                        }
                        black_box(viewer.pan_end(Vec2::new(1_500.0, -800.0)));
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.bench_function("momentum_until_rest", |b| {
        b.iter_batched(
            || {
                let mut viewer = viewer_at(Transform::new(3.0, 0.0, 0.0));
                viewer.pan_start();
                viewer.pan_end(Vec2::new(2_500.0, 1_200.0));
                viewer
            },
            |mut viewer| {
                let mut frames = 0_u32;
                while viewer.tick(FRAME) {
                    frames += 1;
                }
                black_box((frames, viewer.transform()));
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("double_tap_and_settle", |b| {
        b.iter_batched(
            || viewer_at(Transform::IDENTITY),
            |mut viewer| {
                viewer.double_tap(Point::new(120.0, 300.0));
                while viewer.tick(FRAME) {}
                black_box(viewer.image_to_view());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_image_viewer);
criterion_main!(benches);
