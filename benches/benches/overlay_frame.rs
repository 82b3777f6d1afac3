// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Point, Rect, Size};
use showcase_overlay::{Auxiliary, Border, RegionRequest, build_overlay, place_tooltip};
use showcase_tour::{ErrorContext, NoObserver, Step, StepConfig, Tour, TourError, TourOptions};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

fn gen_row(n: usize, cell: f64) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let x0 = (i % 16) as f64 * cell;
            let y0 = (i / 16) as f64 * cell;
            Rect::new(x0, y0, x0 + cell * 0.8, y0 + cell * 0.8)
        })
        .collect()
}

fn request(primary: Rect, auxes: &[Rect], merge: bool) -> RegionRequest {
    RegionRequest {
        padding: Insets::uniform(4.0),
        auxiliaries: auxes
            .iter()
            .map(|r| Auxiliary::new(*r).with_shift(2.0, 2.0))
            .collect(),
        merge,
        border: Some(Border::default()),
        clamp: Some(VIEWPORT.to_rect()),
        ..RegionRequest::new(primary)
    }
}

fn bench_build_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_overlay");
    for &n in &[0usize, 4, 32] {
        let auxes = gen_row(n, 40.0);
        let primary = Rect::new(600.0, 400.0, 700.0, 440.0);
        group.throughput(Throughput::Elements((n + 1) as u64));
        group.bench_function(format!("aux_n{}", n), |b| {
            b.iter(|| black_box(build_overlay(black_box(&request(primary, &auxes, false)))));
        });
        group.bench_function(format!("aux_merged_n{}", n), |b| {
            b.iter(|| black_box(build_overlay(black_box(&request(primary, &auxes, true)))));
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let auxes = gen_row(32, 40.0);
    let overlay = build_overlay(&request(Rect::new(600.0, 400.0, 700.0, 440.0), &auxes, false));
    let points: Vec<Point> = (0..256)
        .map(|i| Point::new((i * 5) as f64, ((i * 7) % 800) as f64))
        .collect();
    let mut group = c.benchmark_group("hit_test");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("aux_n32", |b| {
        b.iter(|| {
            let hits = points
                .iter()
                .filter(|p| overlay.hit_test(**p).is_some())
                .count();
            black_box(hits);
        });
    });
    group.finish();
}

fn bench_place_tooltip(c: &mut Criterion) {
    let targets = gen_row(64, 80.0);
    let mut group = c.benchmark_group("place_tooltip");
    group.throughput(Throughput::Elements(targets.len() as u64));
    group.bench_function("auto_side", |b| {
        b.iter(|| {
            for r in &targets {
                black_box(place_tooltip(*r, Size::new(240.0, 90.0), VIEWPORT, None, 10.0));
            }
        });
    });
    group.finish();
}

fn bench_tour_walk(c: &mut Criterion) {
    let targets = gen_row(64, 80.0);
    let layout = |id: &usize| targets.get(*id).copied();
    let steps: Vec<Step<usize>> = (0..targets.len())
        .map(|i| {
            let config = StepConfig::default()
                .padding(4.0)
                .auxiliary((i + 1) % targets.len(), 2.0, 2.0);
            Step::with_config(i, config)
        })
        .collect();
    let options = TourOptions {
        auto_scroll: false,
        ..TourOptions::default()
    };

    let mut group = c.benchmark_group("tour");
    group.throughput(Throughput::Elements(steps.len() as u64));
    group.bench_function("walk_with_frames_n64", |b| {
        b.iter_batched(
            || {
                let mut tour = Tour::new(options, NoObserver, |_: &TourError, _: ErrorContext| {});
                let _ = tour.start(steps.clone());
                tour
            },
            |mut tour| {
                while tour.is_active() {
                    black_box(tour.frame(&layout, VIEWPORT, Size::new(240.0, 90.0)));
                    tour.next();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_overlay,
    bench_hit_test,
    bench_place_tooltip,
    bench_tour_walk
);
criterion_main!(benches);
