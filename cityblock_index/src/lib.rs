// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cityblock Index: nearest-seed search under the L1 (Manhattan) metric.
//!
//! Cityblock Index is the search engine behind a discrete Voronoi tessellation.
//!
//! - Collect seed points into a [`SeedSet`]; a seed's position is its label.
//! - Answer "which seed is nearest to this point?" through the [`Searcher`] trait.
//! - Swap strategies without changing callers: [`BruteForce`] scans every seed,
//!   [`KdTree`] prunes with a balanced alternating-axis tree.
//!
//! Both backends agree exactly: the nearest seed wins, and among seeds at the
//! same distance the lowest label wins.
//!
//! It is generic over the integer coordinate type `T` and computes distances in
//! a widened type (`i32`→`u64`, `i64`→`u128`), so no distance can overflow.
//!
//! # Example
//!
//! ```rust
//! use cityblock_index::{BruteForce, KdTree, Nearest, Point, Searcher, SeedSet};
//!
//! let seeds = SeedSet::from_points([(0_i64, 0), (3, 3)]).unwrap();
//! let tree = KdTree::build(&seeds);
//!
//! // Equidistant from both seeds: the lower label wins.
//! assert_eq!(tree.nearest(Point::new(1, 2)), Nearest::new(0, 3));
//! assert_eq!(tree.nearest(Point::new(2, 2)).label, 1);
//!
//! // The linear scan gives the same answers.
//! let brute = BruteForce::new(&seeds);
//! assert_eq!(brute.nearest(Point::new(1, 2)), tree.nearest(Point::new(1, 2)));
//! ```
//!
//! An empty seed set is rejected up front, so a constructed searcher can always answer:
//!
//! ```rust
//! use cityblock_index::{Error, SeedSet};
//!
//! assert_eq!(SeedSet::<i64>::new(Vec::new()), Err(Error::EmptySeedSet));
//! ```
//!
//! ## Choosing a backend
//!
//! - `BruteForce`: no build step, O(N) per query. Good for a handful of seeds.
//! - `KdTree`: O(N log N) build, O(log N) expected per query, O(N) worst case
//!   for heavily skewed inputs. Leaf size is a tuning knob with no effect on results.

#![no_std]

extern crate alloc;

pub mod backends;
pub mod error;
pub mod searcher;
pub mod seeds;
pub mod types;

pub use backends::brute_force::BruteForce;
pub use backends::kdtree::{DEFAULT_LEAF_SIZE, KdTree, KdTreeI32, KdTreeI64};
pub use error::{Error, Result};
pub use searcher::Searcher;
pub use seeds::SeedSet;
pub use types::{Axis, Coord, DistOf, Nearest, Point};
