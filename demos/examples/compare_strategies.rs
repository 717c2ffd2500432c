// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute force versus k-d tree.
//!
//! Sample seeds from a fixed generator, tessellate with both strategies, and
//! report the timings. Set `RUST_LOG=info` to see the library's own timing
//! logs, or `RUST_LOG=trace` for every cell.
//!
//! Run:
//! - `cargo run --release -p cityblock_demos --example compare_strategies`

use cityblock_index::{DEFAULT_LEAF_SIZE, KdTree};
use cityblock_raster::{compare, sample_seeds};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(2025);
    for &(size, count) in &[(100usize, 20usize), (300, 100), (500, 1_000)] {
        let seeds = sample_seeds(&mut rng, size, count).unwrap();
        let tree = KdTree::build(&seeds);
        let c = compare(&seeds, size, DEFAULT_LEAF_SIZE).unwrap();
        assert!(c.grids_match(), "strategies disagree");
        println!(
            "{size}x{size}, {count} seeds (tree: {} nodes, depth {}): \
             brute force {:?}, k-d tree {:?}, speedup {}",
            tree.node_count(),
            tree.depth(),
            c.brute_force.elapsed,
            c.kd_tree.elapsed,
            c.speedup()
                .map_or_else(|| "n/a".to_string(), |s| format!("{s:.1}x")),
        );
    }
}
