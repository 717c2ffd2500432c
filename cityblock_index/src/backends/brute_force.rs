// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute-force backend with linear scans. Small and simple; the reference for every other backend.

use core::fmt::Debug;

use crate::searcher::Searcher;
use crate::seeds::SeedSet;
use crate::types::{Coord, Nearest, Point};

/// Linear scan over every seed, in label order.
#[derive(Copy, Clone)]
pub struct BruteForce<'a, T> {
    seeds: &'a SeedSet<T>,
}

impl<'a, T: Coord> BruteForce<'a, T> {
    /// Search the given seed set.
    pub const fn new(seeds: &'a SeedSet<T>) -> Self {
        Self { seeds }
    }

    /// The seed set being searched.
    pub const fn seeds(&self) -> &'a SeedSet<T> {
        self.seeds
    }
}

impl<T: Coord> Debug for BruteForce<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BruteForce")
            .field("seeds", &self.seeds.len())
            .finish_non_exhaustive()
    }
}

impl<T: Coord> Searcher<T> for BruteForce<'_, T> {
    fn nearest(&self, query: Point<T>) -> Nearest<T::Dist> {
        let points = self.seeds.points();
        // SeedSet is never empty.
        let mut best = Nearest::new(0, query.l1(&points[0]));
        for (label, p) in points.iter().enumerate().skip(1) {
            let d = query.l1(p);
            // Strict `<` keeps the first (lowest) label on ties.
            if d < best.distance {
                best = Nearest::new(label, d);
            }
        }
        best
    }

    fn seed_count(&self) -> usize {
        self.seeds.len()
    }
}
