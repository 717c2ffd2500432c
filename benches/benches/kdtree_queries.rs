// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cityblock_index::{BruteForce, KdTree, Point, Searcher, SeedSet};
use cityblock_raster::sample_seeds;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIDE: usize = 1024;

fn seeds(count: usize) -> SeedSet<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xBADC_F00D_1234_5678);
    sample_seeds(&mut rng, SIDE, count).unwrap()
}

fn queries(count: usize) -> Vec<Point<i64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xFACE_FEED_CAFE_BABE);
    let side = SIDE as i64;
    (0..count)
        .map(|_| Point::new(rng.random_range(0..side), rng.random_range(0..side)))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kd_tree_build");
    for &n in &[100usize, 1_000, 10_000] {
        let seeds = seeds(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| black_box(KdTree::build(&seeds).node_count()));
        });
    }
    group.finish();
}

fn run_queries<S: Searcher<i64>>(searcher: &S, points: &[Point<i64>]) -> usize {
    points.iter().map(|&p| searcher.nearest(p).label).sum()
}

fn bench_nearest(c: &mut Criterion) {
    let points = queries(4_096);
    let mut group = c.benchmark_group("nearest");
    group.throughput(Throughput::Elements(points.len() as u64));
    for &n in &[100usize, 1_000, 10_000] {
        let seeds = seeds(n);
        let tree = KdTree::build(&seeds);
        group.bench_function(format!("kd_tree_n{n}"), |b| {
            b.iter(|| black_box(run_queries(&tree, &points)));
        });
        let brute = BruteForce::new(&seeds);
        group.bench_function(format!("brute_force_n{n}"), |b| {
            b.iter(|| black_box(run_queries(&brute, &points)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_nearest);
criterion_main!(benches);
