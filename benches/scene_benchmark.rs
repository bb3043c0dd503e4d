//! Benchmark for full scene refresh.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shape_canvas::prelude::*;

fn demo_scene() -> Scene {
    let mut scene = Scene::default();
    scene.add(Rectangle::new(Point::new(0, 0), Point::new(14, 5)));
    scene.add(Line::horizontal(Point::new(0, 15), 17));
    scene.add(Face::new(Point::new(15, 10), Point::new(27, 18)));
    scene.add(HalfCircle::new(Point::new(40, 10), Point::new(50, 20)));
    scene.add(CrossedCircle::new(Point::new(33, 30), Point::new(37, 26)));
    scene.add(CrossedCircle::new(Point::new(16, 44), Point::new(26, 34)));
    scene.add(CrossedCircle::new(Point::new(5, 33), Point::new(12, 26)));
    scene.add(CrossedCircle::new(Point::new(18, 11), Point::new(24, 1)));
    scene
}

fn scene_refresh_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    let mut scene = demo_scene();

    group.bench_function("redraw_demo_120x50", |b| {
        b.iter(|| {
            black_box(scene.redraw().unwrap());
        });
    });

    group.bench_function("render_demo_120x50", |b| {
        b.iter(|| black_box(scene.render().unwrap()));
    });

    group.finish();
}

criterion_group!(benches, scene_refresh_benchmark);
criterion_main!(benches);
