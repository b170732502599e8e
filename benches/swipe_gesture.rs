// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the swipe gesture pipeline.
//!
//! Measures the performance of:
//! - A full drag from the start of the track to the lock point
//! - Sampling the return animation after an early release

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use swipe_button::ui::swipe_button::{Metrics, SwipeButton, SwipeEvent, VisualConfig};

fn metrics() -> Metrics {
    Metrics {
        track_end: 360.0,
        thumb_left: 0.0,
        thumb_width: 56.0,
        label_start: 130.0,
        label_end: 230.0,
    }
}

/// Benchmark a complete drag, one move event per pixel.
fn bench_drag_to_lock(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_gesture");
    let m = metrics();

    group.bench_function("drag_to_lock", |b| {
        b.iter(|| {
            let mut button = SwipeButton::new(VisualConfig::default());
            let now = Instant::now();
            button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
            for x in 0..=360 {
                button.handle(
                    SwipeEvent::Moved {
                        x: x as f32,
                        metrics: m,
                    },
                    now,
                );
            }
            black_box(button.phase());
        });
    });

    group.finish();
}

/// Benchmark ticking the return animation at 60 fps until it finishes.
fn bench_return_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_gesture");
    let m = metrics();

    group.bench_function("return_animation", |b| {
        b.iter(|| {
            let mut button = SwipeButton::new(VisualConfig::default());
            let start = Instant::now();
            button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, start);
            button.handle(SwipeEvent::Moved { x: 150.0, metrics: m }, start);
            button.handle(SwipeEvent::Released { x: 150.0, metrics: m }, start);

            let mut frame = 0;
            while button.is_animating() {
                frame += 1;
                button.tick(start + Duration::from_millis(16 * frame));
            }
            black_box(button.thumb_x());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag_to_lock, bench_return_animation);
criterion_main!(benches);
