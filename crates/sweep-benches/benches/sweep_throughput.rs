// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::expect_used)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sweep_geom::{sweep, sweep_test, ContactResolver, SweptBox};

/// Unit cubes scattered in a slab ahead of a mover walking along `+x`.
fn obstacle_field(n: usize) -> Vec<SweptBox> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n)
        .map(|_| {
            let origin = Vec3::new(
                rng.gen_range(1.5..40.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            );
            SweptBox::unit_obstacle(origin).expect("finite origin")
        })
        .collect()
}

fn mover() -> SweptBox {
    SweptBox::unit(Vec3::ZERO, Vec3::new(8.0, -0.5, 0.25)).expect("valid mover")
}

fn bench_pairwise(c: &mut Criterion) {
    let m = mover();
    let hit = SweptBox::unit_obstacle(Vec3::new(3.0, 0.0, 0.0)).expect("obstacle");
    let miss = SweptBox::unit_obstacle(Vec3::new(0.0, 5.0, 0.0)).expect("obstacle");
    let mut group = c.benchmark_group("sweep_test");
    group.bench_function("hit", |b| b.iter(|| sweep_test(black_box(&m), black_box(&hit))));
    group.bench_function("early_out", |b| {
        b.iter(|| sweep_test(black_box(&m), black_box(&miss)))
    });
    group.finish();
}

fn bench_broad(c: &mut Criterion) {
    let m = mover();
    let mut group = c.benchmark_group("broad_sweep");
    for &n in &[10usize, 100, 1_000, 10_000] {
        let obstacles = obstacle_field(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &obstacles, |b, obstacles| {
            b.iter(|| sweep(black_box(&m), black_box(obstacles.as_slice())));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let m = mover();
    let resolver = ContactResolver::default();
    let mut group = c.benchmark_group("resolve");
    for &n in &[10usize, 100, 1_000] {
        let obstacles = obstacle_field(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &obstacles, |b, obstacles| {
            b.iter(|| resolver.resolve(black_box(&m), black_box(obstacles)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_broad, bench_resolve);
criterion_main!(benches);
