// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock timing of tessellation passes and side-by-side strategy comparison.

use std::time::{Duration, Instant};

use cityblock_index::{Coord, Result, SeedSet};
use tracing::info;

use crate::strategy::{Run, Strategy, run};

/// A value together with the time it took to produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timed<R> {
    /// Whatever the timed closure returned.
    pub value: R,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

/// Run `f` once and measure its wall-clock duration.
///
/// The closure's result is returned untouched.
pub fn time<R>(f: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Brute force and k-d tree runs over the same seeds and grid.
#[derive(Clone, Debug)]
pub struct Comparison {
    /// The linear-scan run.
    pub brute_force: Run,
    /// The k-d tree run.
    pub kd_tree: Run,
}

impl Comparison {
    /// Whether both strategies labelled every cell identically.
    pub fn grids_match(&self) -> bool {
        self.brute_force.grid == self.kd_tree.grid
    }

    /// How many times faster the k-d tree was. `None` if its time rounds to zero.
    pub fn speedup(&self) -> Option<f64> {
        let tree = self.kd_tree.elapsed.as_secs_f64();
        (tree > 0.0).then(|| self.brute_force.elapsed.as_secs_f64() / tree)
    }
}

/// Tessellate with both strategies and time each pass.
pub fn compare<T: Coord>(seeds: &SeedSet<T>, size: usize, leaf_size: usize) -> Result<Comparison> {
    let brute_force = run(seeds, size, Strategy::BruteForce)?;
    let kd_tree = run(seeds, size, Strategy::KdTree { leaf_size })?;
    let comparison = Comparison {
        brute_force,
        kd_tree,
    };
    info!(
        brute_force = ?comparison.brute_force.elapsed,
        kd_tree = ?comparison.kd_tree.elapsed,
        speedup = comparison.speedup().unwrap_or(f64::INFINITY),
        grids_match = comparison.grids_match(),
        "compared strategies"
    );
    Ok(comparison)
}
