// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate L1 Voronoi regions for random points in a square and save the plot.
//!
//! Run with: cargo run --release -p cityblock_cli --
//!
//! Usage:
//!   cityblock                       100×100 grid, 20 seeds, k-d tree, out.png
//!   cityblock -s 400 -n 50 -v 1     larger grid, log timing
//!   cityblock -b -i brute.png       brute force, custom output file
//!   cityblock --compare --seed 7    run both strategies and report the speedup
//!
//! `RUST_LOG` overrides the level chosen by `--verbosity`.

mod render;

use std::path::PathBuf;

use cityblock_index::DEFAULT_LEAF_SIZE;
use cityblock_raster::{Strategy, compare, run, sample_seeds};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cityblock")]
#[command(about = "Generate L1 Voronoi regions for randomly sampled points in a square")]
struct Args {
    /// Side length of the square grid
    #[arg(short = 's', long, default_value_t = 100)]
    side_length: usize,

    /// Number of random points to generate
    #[arg(short = 'n', long, default_value_t = 20)]
    num_points: usize,

    /// Use brute force instead of the k-d tree
    #[arg(short = 'b', long, visible_alias = "brute_force")]
    brute_force: bool,

    /// Debug output: 0 prints nothing, 1 prints timing, 2 prints every cell
    #[arg(short = 'v', long, default_value_t = 0)]
    verbosity: u8,

    /// Image file to save the plot to
    #[arg(short = 'i', long, default_value = "out.png")]
    image_file: PathBuf,

    /// Random seed (drawn at random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Leaf bucket size of the k-d tree
    #[arg(long, default_value_t = DEFAULT_LEAF_SIZE)]
    leaf_size: usize,

    /// Run both strategies, check they agree, and report the speedup
    #[arg(long)]
    compare: bool,
}

impl Args {
    fn strategy(&self) -> Strategy {
        if self.brute_force {
            Strategy::BruteForce
        } else {
            Strategy::KdTree {
                leaf_size: self.leaf_size,
            }
        }
    }
}

fn init_logging(verbosity: u8) -> eyre::Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "trace",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    init_logging(args.verbosity)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    // Rejects an empty grid or seed set before any work is done.
    let seeds = sample_seeds(&mut rng, args.side_length, args.num_points)?;
    info!(
        seed,
        side_length = args.side_length,
        num_points = args.num_points,
        "sampled seeds"
    );

    let grid = if args.compare {
        let c = compare(&seeds, args.side_length, args.leaf_size)?;
        if !c.grids_match() {
            eyre::bail!("brute force and k-d tree tessellations differ");
        }
        match c.speedup() {
            Some(speedup) => println!(
                "brute force {:?}, k-d tree {:?} ({speedup:.1}x)",
                c.brute_force.elapsed, c.kd_tree.elapsed
            ),
            None => println!(
                "brute force {:?}, k-d tree {:?}",
                c.brute_force.elapsed, c.kd_tree.elapsed
            ),
        }
        c.kd_tree.grid
    } else {
        run(&seeds, args.side_length, args.strategy())?.grid
    };

    let image = render::plot(&seeds, &grid)?;
    render::save(&image, &args.image_file)?;
    info!(path = %args.image_file.display(), "saved plot");
    Ok(())
}
