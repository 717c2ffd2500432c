// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(dead_code, reason = "Each test binary uses a different subset of helpers.")]

use cityblock_index::{Point, SeedSet};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Uniform seeds in `[0, size)²` from a fixed seed.
pub fn uniform_seeds(count: usize, size: usize, seed: u64) -> SeedSet<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    cityblock_raster::sample_seeds(&mut rng, size, count).unwrap()
}

/// Seeds packed into a few tight clusters, with many duplicates.
pub fn clustered_seeds(
    clusters: usize,
    per_cluster: usize,
    size: usize,
    seed: u64,
) -> SeedSet<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let side = i64::try_from(size).unwrap();
    let mut points = Vec::with_capacity(clusters * per_cluster);
    for _ in 0..clusters {
        let center = Point::new(rng.random_range(0..side), rng.random_range(0..side));
        for _ in 0..per_cluster {
            let dr = rng.random_range(-1..=1);
            let dc = rng.random_range(-1..=1);
            points.push(Point::new(
                (center.row + dr).clamp(0, side - 1),
                (center.col + dc).clamp(0, side - 1),
            ));
        }
    }
    SeedSet::new(points).unwrap()
}

/// Seeds along a single row: the worst case for one of the split axes.
pub fn collinear_seeds(count: usize, row: i64) -> SeedSet<i64> {
    let points = (0..count)
        .map(|i| Point::new(row, i64::try_from(i * 2).unwrap()))
        .collect();
    SeedSet::new(points).unwrap()
}
