// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid rasterization: label every cell of an S×S grid with its nearest seed.

use cityblock_index::{Coord, Error, Point, Result, Searcher};
use tracing::{debug, trace};

/// Fully populated S×S grid of seed labels, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputGrid {
    size: usize,
    labels: Vec<usize>,
}

impl OutputGrid {
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Label of the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(self.labels[row * self.size + col])
        } else {
            None
        }
    }

    /// All labels in row-major order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consume the grid and return its row-major labels.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    /// Iterate rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.labels.chunks_exact(self.size)
    }

    /// Iterate `(row, col, label)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (i / self.size, i % self.size, label))
    }
}

/// Validate a grid side length for coordinate type `T` and return the cell count.
///
/// Fails with [`Error::EmptyGrid`] for zero and [`Error::GridTooLarge`] when the
/// largest coordinate or the cell count is not representable, or when the
/// label buffer would exceed `isize::MAX` bytes.
pub fn check_size<T: Coord>(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(Error::EmptyGrid);
    }
    // Coordinates are monotone in the index, so checking the last one covers the grid.
    if T::from_index(size - 1).is_none() {
        return Err(Error::GridTooLarge { size });
    }
    // The label buffer must fit in a single allocation.
    size.checked_mul(size)
        .filter(|&cells| {
            cells
                .checked_mul(size_of::<usize>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(Error::GridTooLarge { size })
}

/// Label every cell of a `size`×`size` grid with the nearest seed of `searcher`.
///
/// Cells are visited row by row (row outer, column inner). Fails before any
/// query if `size` is zero or its coordinates do not fit `T`.
pub fn rasterize<T, S>(size: usize, searcher: &S) -> Result<OutputGrid>
where
    T: Coord,
    S: Searcher<T> + ?Sized,
{
    let cells = check_size::<T>(size)?;
    let mut labels = Vec::new();
    labels
        .try_reserve_exact(cells)
        .map_err(|_| Error::GridTooLarge { size })?;
    let coords: Vec<T> = (0..size).filter_map(T::from_index).collect();

    debug!(size, seeds = searcher.seed_count(), "rasterizing grid");
    for (row, &r) in coords.iter().enumerate() {
        for (col, &c) in coords.iter().enumerate() {
            trace!(row, col, "processing cell");
            labels.push(searcher.nearest(Point::new(r, c)).label);
        }
    }
    Ok(OutputGrid { size, labels })
}
