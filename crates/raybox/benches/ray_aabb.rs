use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raybox::{candidates, par_candidates, Ray, RayBoxOptions};
use raybox_math::{Aabb3, Point3, Vec3};

fn grid_of_boxes(n: usize) -> Vec<Aabb3> {
    let mut boxes = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let (x, y) = (i as f64 * 1.5, j as f64 * 1.5);
            boxes.push(Aabb3::from_bounds([x, y, 0.0, x + 1.0, y + 1.0, 1.0]));
        }
    }
    boxes
}

fn bench_single(c: &mut Criterion) {
    let aabb = Aabb3::from_bounds([0.0, 0.0, 0.0, 2.0, 2.0, 2.0]);
    let ray = Ray::new(Point3::new(-1.0, 0.3, 0.7), Vec3::new(1.0, 0.2, 0.1));
    let infinite = RayBoxOptions::infinite();
    let segment = RayBoxOptions::segment().with_ray_ends(false);

    c.bench_function("intersect_infinite", |b| {
        b.iter(|| black_box(&ray).intersect_aabb(black_box(&aabb), &infinite))
    });
    c.bench_function("intersect_segment", |b| {
        b.iter(|| black_box(&ray).intersect_aabb(black_box(&aabb), &segment))
    });
}

fn bench_candidates(c: &mut Criterion) {
    let boxes = grid_of_boxes(200);
    let ray = Ray::new(Point3::new(-1.0, -1.0, 0.5), Vec3::new(1.0, 0.9, 0.0));
    let opts = RayBoxOptions::default();

    c.bench_function("candidates_40k", |b| {
        b.iter(|| candidates(black_box(&ray), black_box(&boxes), &opts))
    });
    c.bench_function("par_candidates_40k", |b| {
        b.iter(|| par_candidates(black_box(&ray), black_box(&boxes), &opts))
    });
}

criterion_group!(benches, bench_single, bench_candidates);
criterion_main!(benches);
