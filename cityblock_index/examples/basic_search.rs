// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Cityblock Index: build a seed set, build a tree, and query it.

use cityblock_index::{BruteForce, KdTree, Point, Searcher, SeedSet};

fn main() {
    let seeds = SeedSet::from_points([(0_i64, 0), (3, 3), (9, 1)]).expect("non-empty seed set");

    let brute = BruteForce::new(&seeds);
    let tree = KdTree::build(&seeds);
    println!("tree: {:?}", tree);

    // (1, 2) is 3 away from both seed 0 and seed 1; the lower label wins.
    let q = Point::new(1, 2);
    let hit = tree.nearest(q);
    println!("nearest to {:?}: label={} distance={}", q, hit.label, hit.distance);
    assert_eq!(hit, brute.nearest(q));
}
