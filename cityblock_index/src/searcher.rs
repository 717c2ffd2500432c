// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Searcher trait for nearest-seed strategies.

use crate::types::{Coord, Nearest, Point};

/// Nearest-seed strategy used by rasterizers.
///
/// Implementations answer for the seed set they were built over. Every
/// implementation must agree exactly with a linear scan: the result is the
/// seed with the smallest L1 distance, and the smallest label among equals.
pub trait Searcher<T: Coord> {
    /// Nearest seed to `query`. The query may lie anywhere, not only on the grid.
    fn nearest(&self, query: Point<T>) -> Nearest<T::Dist>;

    /// Number of seeds searched. Labels returned by [`Searcher::nearest`] are below this.
    fn seed_count(&self) -> usize;
}

impl<T: Coord, S: Searcher<T> + ?Sized> Searcher<T> for &S {
    #[inline]
    fn nearest(&self, query: Point<T>) -> Nearest<T::Dist> {
        (**self).nearest(query)
    }

    #[inline]
    fn seed_count(&self) -> usize {
        (**self).seed_count()
    }
}
