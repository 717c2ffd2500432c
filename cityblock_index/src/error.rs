// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for seed sets and tessellation inputs.

use thiserror::Error;

/// Invalid input to seed-set construction or rasterization.
///
/// Every variant is detected before any query runs; none are retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A seed set needs at least one seed to answer nearest-seed queries.
    #[error("seed set is empty: at least one seed is required")]
    EmptySeedSet,

    /// The grid side length must be positive.
    #[error("grid size must be positive")]
    EmptyGrid,

    /// The grid side length does not fit the coordinate type.
    #[error("grid size {size} does not fit the coordinate type")]
    GridTooLarge {
        /// Requested side length.
        size: usize,
    },
}

/// Result type for seed-set and tessellation operations.
pub type Result<T> = core::result::Result<T, Error>;
