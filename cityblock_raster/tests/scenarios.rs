// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small hand-checked tessellations.

use cityblock_index::{Error, SeedSet};
use cityblock_raster::{OutputGrid, Strategy, run, sample_seeds, tessellate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn both(seeds: &SeedSet<i64>, size: usize) -> OutputGrid {
    let brute = tessellate(seeds, size, Strategy::BruteForce).unwrap();
    let tree = tessellate(seeds, size, Strategy::KdTree { leaf_size: 1 }).unwrap();
    assert_eq!(brute, tree);
    brute
}

#[test]
fn two_corners_split_on_the_anti_diagonal() {
    let seeds = SeedSet::from_points([(0, 0), (3, 3)]).unwrap();
    let grid = both(&seeds, 4);
    for (row, col, label) in grid.cells() {
        let expected = usize::from(row + col > 3);
        assert_eq!(label, expected, "cell ({row}, {col})");
    }
    // Equidistant (3 and 3): the first seed wins.
    assert_eq!(grid.get(1, 2), Some(0));
    assert_eq!(grid.get(2, 1), Some(0));
}

#[test]
fn one_cell_one_seed() {
    let seeds = SeedSet::from_points([(0, 0)]).unwrap();
    assert_eq!(both(&seeds, 1).labels(), &[0]);
}

#[test]
fn no_seeds_is_rejected_before_rasterizing() {
    assert_eq!(SeedSet::<i64>::new(Vec::new()), Err(Error::EmptySeedSet));
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(sample_seeds(&mut rng, 16, 0), Err(Error::EmptySeedSet));
}

#[test]
fn duplicate_seeds_always_pick_the_first() {
    let seeds = SeedSet::from_points([(2, 2), (2, 2)]).unwrap();
    let grid = both(&seeds, 5);
    assert_eq!(grid.get(2, 2), Some(0));
    assert!(grid.labels().iter().all(|&l| l == 0));
}

#[test]
fn ties_between_distinct_seeds_pick_the_lowest_label() {
    // Label order deliberately differs from spatial order.
    let seeds = SeedSet::from_points([(4, 4), (0, 4), (4, 0), (0, 0)]).unwrap();
    let grid = both(&seeds, 5);
    // The centre is 4 away from all four seeds.
    assert_eq!(grid.get(2, 2), Some(0));
    // (0, 2) is 2 away from seeds 1 and 3.
    assert_eq!(grid.get(0, 2), Some(1));
    // (2, 0) is 2 away from seeds 2 and 3.
    assert_eq!(grid.get(2, 0), Some(2));
}

#[test]
fn zero_grid_is_rejected() {
    let seeds = SeedSet::from_points([(0, 0)]).unwrap();
    assert_eq!(run(&seeds, 0, Strategy::BruteForce).unwrap_err(), Error::EmptyGrid);
}
