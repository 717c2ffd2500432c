// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable, labelled seed sets.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::types::Point;

/// An ordered, non-empty sequence of seed points.
///
/// The position of a seed in the sequence is its label. Duplicate coordinates
/// are allowed; the lower label wins every tie between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedSet<T> {
    points: Vec<Point<T>>,
}

impl<T: Copy> SeedSet<T> {
    /// Create a seed set. Fails with [`Error::EmptySeedSet`] if `points` is empty.
    pub fn new(points: Vec<Point<T>>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptySeedSet);
        }
        Ok(Self { points })
    }

    /// Collect a seed set from anything that yields points.
    pub fn from_points<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point<T>>,
    {
        Self::new(points.into_iter().map(Into::into).collect())
    }

    /// Number of seeds. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The seed with the given label, if any.
    #[inline]
    pub fn get(&self, label: usize) -> Option<Point<T>> {
        self.points.get(label).copied()
    }

    /// All seeds in label order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Iterate `(label, point)` pairs in label order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, Point<T>)> + '_ {
        self.points.iter().copied().enumerate()
    }
}
