// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cityblock_index::{DEFAULT_LEAF_SIZE, SeedSet};
use cityblock_raster::{Strategy, sample_seeds, tessellate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeds(size: usize, count: usize) -> SeedSet<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF);
    sample_seeds(&mut rng, size, count).unwrap()
}

fn bench_by_seed_count(c: &mut Criterion) {
    let size = 128;
    let mut group = c.benchmark_group("tessellate_128");
    group.throughput(Throughput::Elements((size * size) as u64));
    for &count in &[4usize, 20, 100, 500] {
        let seeds = seeds(size, count);
        group.bench_with_input(BenchmarkId::new("brute_force", count), &seeds, |b, s| {
            b.iter(|| black_box(tessellate(s, size, Strategy::BruteForce).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("kd_tree", count), &seeds, |b, s| {
            b.iter(|| black_box(tessellate(s, size, Strategy::kd_tree()).unwrap()));
        });
    }
    group.finish();
}

fn bench_by_grid_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("tessellate_20_seeds");
    for &size in &[32usize, 100, 256] {
        let seeds = seeds(size, 20);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("brute_force", size), &seeds, |b, s| {
            b.iter(|| black_box(tessellate(s, size, Strategy::BruteForce).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("kd_tree", size), &seeds, |b, s| {
            b.iter(|| black_box(tessellate(s, size, Strategy::kd_tree()).unwrap()));
        });
    }
    group.finish();
}

fn bench_leaf_size(c: &mut Criterion) {
    let size = 128;
    let seeds = seeds(size, 500);
    let mut group = c.benchmark_group("kd_tree_leaf_size");
    group.throughput(Throughput::Elements((size * size) as u64));
    for &leaf_size in &[1usize, 4, DEFAULT_LEAF_SIZE, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(leaf_size), &leaf_size, |b, &l| {
            let strategy = Strategy::KdTree { leaf_size: l };
            b.iter(|| black_box(tessellate(&seeds, size, strategy).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_by_seed_count, bench_by_grid_size, bench_leaf_size);
criterion_main!(benches);
