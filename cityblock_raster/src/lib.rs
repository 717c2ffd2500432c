// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cityblock Raster: discrete L1 Voronoi tessellation of square grids.
//!
//! This crate drives a [`cityblock_index::Searcher`] over every cell of an
//! S×S grid and records the label of the nearest seed.
//!
//! - [`rasterize`] labels every cell in row-major order with any searcher.
//! - [`Strategy`] selects brute force or a k-d tree; [`tessellate`] and [`run`]
//!   build the searcher and rasterize, [`run`] also times the pass.
//! - [`compare`] runs both strategies on the same input and reports the speedup.
//! - [`sample_seeds`] draws uniform seeds from a caller-owned generator.
//!
//! # Example
//!
//! ```rust
//! use cityblock_index::SeedSet;
//! use cityblock_raster::{Strategy, tessellate};
//!
//! let seeds = SeedSet::from_points([(0_i64, 0), (3, 3)]).unwrap();
//! let grid = tessellate(&seeds, 4, Strategy::kd_tree()).unwrap();
//!
//! // (1, 2) is 3 away from both seeds; the lower label wins.
//! assert_eq!(grid.get(1, 2), Some(0));
//! assert_eq!(grid.get(3, 3), Some(1));
//! ```
//!
//! Timing follows the same shape; the clock covers tree construction as well:
//!
//! ```rust
//! use cityblock_index::SeedSet;
//! use cityblock_raster::compare;
//!
//! let seeds = SeedSet::from_points([(1_i64, 1), (6, 2), (3, 7)]).unwrap();
//! let c = compare(&seeds, 16, 8).unwrap();
//! assert!(c.grids_match());
//! println!("brute force {:?}, k-d tree {:?}", c.brute_force.elapsed, c.kd_tree.elapsed);
//! ```
//!
//! Logging goes through `tracing`: `info` for strategy and timing, `debug` for
//! tree construction and rasterization start, `trace` for every cell.

pub mod bench;
pub mod raster;
pub mod sample;
pub mod strategy;

pub use bench::{Comparison, Timed, compare, time};
pub use raster::{OutputGrid, check_size, rasterize};
pub use sample::sample_seeds;
pub use strategy::{Run, Strategy, run, tessellate};
