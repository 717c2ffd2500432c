// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessellation basics.
//!
//! Label a small grid with three seeds and print it as text, one character
//! per cell. Equidistant cells go to the lower label.
//!
//! Run:
//! - `cargo run -p cityblock_demos --example tessellate_basics`

use cityblock_index::SeedSet;
use cityblock_raster::{Strategy, tessellate};

fn main() {
    let seeds = SeedSet::from_points([(1_i64, 1), (2, 8), (7, 4)]).unwrap();
    let grid = tessellate(&seeds, 10, Strategy::kd_tree()).unwrap();

    for (row, labels) in grid.rows().enumerate() {
        let line: String = labels
            .iter()
            .enumerate()
            .map(|(col, &label)| {
                let seed = seeds.get(label).unwrap();
                if seed.row == row as i64 && seed.col == col as i64 {
                    '*'
                } else {
                    char::from(b'a' + label as u8)
                }
            })
            .collect();
        println!("{line}");
    }

    // Cell (1, 5) is 4 away from both seed 0 and seed 1.
    assert_eq!(grid.get(1, 5), Some(0));
    println!("cell (1, 5) -> seed {}", grid.get(1, 5).unwrap());
}
