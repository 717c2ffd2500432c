// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy selection: brute-force scan or k-d tree, behind one entry point.

use core::fmt;
use std::time::Duration;

use cityblock_index::{BruteForce, Coord, DEFAULT_LEAF_SIZE, KdTree, Result, SeedSet};
use tracing::info;

use crate::bench::{Timed, time};
use crate::raster::{OutputGrid, check_size, rasterize};

/// Nearest-seed strategy used for a tessellation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Scan every seed for every cell.
    BruteForce,
    /// Build a k-d tree once, then query it for every cell.
    KdTree {
        /// Leaf bucket size of the tree.
        leaf_size: usize,
    },
}

impl Strategy {
    /// The k-d tree strategy with the default leaf size.
    pub const fn kd_tree() -> Self {
        Self::KdTree {
            leaf_size: DEFAULT_LEAF_SIZE,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::kd_tree()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BruteForce => f.write_str("brute force"),
            Self::KdTree { .. } => f.write_str("k-d tree"),
        }
    }
}

/// A timed tessellation.
#[derive(Clone, Debug)]
pub struct Run {
    /// Strategy that produced the grid.
    pub strategy: Strategy,
    /// Labels for every cell.
    pub grid: OutputGrid,
    /// Wall-clock time for index construction plus rasterization.
    pub elapsed: Duration,
}

/// Tessellate a `size`×`size` grid with the given strategy.
///
/// The k-d tree, if selected, is built here and dropped when done.
pub fn tessellate<T: Coord>(
    seeds: &SeedSet<T>,
    size: usize,
    strategy: Strategy,
) -> Result<OutputGrid> {
    check_size::<T>(size)?;
    match strategy {
        Strategy::BruteForce => rasterize(size, &BruteForce::new(seeds)),
        Strategy::KdTree { leaf_size } => {
            rasterize(size, &KdTree::with_leaf_size(seeds, leaf_size))
        }
    }
}

/// Tessellate and time the whole pass, including index construction.
///
/// Input is validated before the clock starts, so an invalid grid size is
/// reported without building anything.
pub fn run<T: Coord>(seeds: &SeedSet<T>, size: usize, strategy: Strategy) -> Result<Run> {
    check_size::<T>(size)?;
    info!("Using {strategy}");
    let Timed { value, elapsed } = time(|| tessellate(seeds, size, strategy));
    let grid = value?;
    info!(
        size,
        seeds = seeds.len(),
        "Voronoi computation took {elapsed:?} using {strategy}"
    );
    Ok(Run {
        strategy,
        grid,
        elapsed,
    })
}
