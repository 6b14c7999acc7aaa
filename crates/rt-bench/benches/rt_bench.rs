//! Benchmarks for rt-rs kernel operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use rt_math::{transform, Matrix, Tuple};
use rt_render::{hit, IdAllocator, Ray, Sphere};
use std::f64::consts::FRAC_PI_4;

/// A dense, invertible transform exercising every cofactor path.
fn test_matrix() -> Matrix {
    transform::translation(10.0, 5.0, 7.0)
        * transform::rotation_x(FRAC_PI_4)
        * transform::scaling(2.0, 0.5, 4.0)
        * transform::shearing(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
}

/// Benchmark 4x4 matrix operations.
fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    let m = test_matrix();

    group.bench_function("multiply", |b| {
        b.iter(|| black_box(m) * black_box(m))
    });

    group.bench_function("determinant", |b| {
        b.iter(|| black_box(m).determinant())
    });

    group.bench_function("inverse", |b| {
        b.iter(|| black_box(m).inverse().unwrap())
    });

    group.finish();
}

/// Benchmark ray/sphere intersection plus hit selection over a bundle of
/// rays, one per sample of a small wall - the shape of a real render loop.
fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");

    let mut ids = IdAllocator::new();
    let mut sphere = Sphere::new(ids.next_id());
    sphere
        .set_transform(transform::scaling(1.0, 0.5, 1.0))
        .unwrap();

    let size = 64u32;
    let origin = Tuple::point(0.0, 0.0, -5.0);
    let rays: Vec<Ray> = (0..size * size)
        .map(|i| {
            let x = (i % size) as f64 / size as f64 * 7.0 - 3.5;
            let y = (i / size) as f64 / size as f64 * 7.0 - 3.5;
            let target = Tuple::point(x, y, 10.0);
            Ray::new(origin, (target - origin).normalize())
        })
        .collect();

    group.throughput(Throughput::Elements(rays.len() as u64));
    group.bench_function("intersect_and_hit", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for ray in &rays {
                let xs = sphere.intersect(black_box(ray));
                if hit(&xs).is_some() {
                    hits += 1;
                }
            }
            hits
        })
    });

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_intersect);
criterion_main!(benches);
