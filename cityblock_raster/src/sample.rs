// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform random seed sampling.

use cityblock_index::{Error, Point, Result, SeedSet};
use rand::Rng;

/// Draw `count` seeds uniformly from the `size`×`size` grid.
///
/// Each seed draws its row, then its column. Seeds may coincide. The generator
/// is owned by the caller, so a fixed-seed generator gives reproducible sets.
pub fn sample_seeds<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    count: usize,
) -> Result<SeedSet<i64>> {
    if size == 0 {
        return Err(Error::EmptyGrid);
    }
    let side = i64::try_from(size).map_err(|_| Error::GridTooLarge { size })?;
    let points = (0..count)
        .map(|_| Point::new(rng.random_range(0..side), rng.random_range(0..side)))
        .collect();
    SeedSet::new(points)
}
