// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::fmt::Debug;
use core::ops::Add;

/// Integer point in 2D, addressed as `(row, col)` like a raster cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    /// Row (first axis).
    pub row: T,
    /// Column (second axis).
    pub col: T,
}

impl<T> Point<T> {
    /// Create a new point from its row and column.
    pub const fn new(row: T, col: T) -> Self {
        Self { row, col }
    }
}

impl<T: Copy> Point<T> {
    /// The coordinate along `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }
}

impl<T: Coord> Point<T> {
    /// L1 (Manhattan) distance to `other`: `|dr| + |dc|`.
    #[inline]
    pub fn l1(&self, other: &Self) -> T::Dist {
        T::abs_diff(self.row, other.row) + T::abs_diff(self.col, other.col)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((row, col): (T, T)) -> Self {
        Self::new(row, col)
    }
}

/// Splitting axis of a space-partitioning node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Split on the row coordinate.
    Row,
    /// Split on the column coordinate.
    Col,
}

impl Axis {
    /// The axis used at `depth`: rows at even depths, columns at odd depths.
    #[inline]
    pub const fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::Row } else { Self::Col }
    }

    /// The other axis.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Row => Self::Col,
            Self::Col => Self::Row,
        }
    }
}

/// Integer coordinate scalar for points and distances.
///
/// Distances are computed in a widened unsigned type (e.g. `i32`→`u64`,
/// `i64`→`u128`) so that `|dr| + |dc|` cannot overflow for any pair of
/// representable points.
pub trait Coord: Copy + Ord + Debug {
    /// Widened distance type.
    type Dist: Copy + Ord + Add<Output = Self::Dist> + Debug;

    /// Absolute difference `|a - b|` in the distance type.
    fn abs_diff(a: Self, b: Self) -> Self::Dist;

    /// Convert a grid index into a coordinate, if it is representable.
    fn from_index(i: usize) -> Option<Self>;
}

impl Coord for i32 {
    type Dist = u64;

    #[inline]
    fn abs_diff(a: Self, b: Self) -> Self::Dist {
        u64::from(a.abs_diff(b))
    }

    #[inline]
    fn from_index(i: usize) -> Option<Self> {
        Self::try_from(i).ok()
    }
}

impl Coord for i64 {
    type Dist = u128;

    #[inline]
    fn abs_diff(a: Self, b: Self) -> Self::Dist {
        u128::from(a.abs_diff(b))
    }

    #[inline]
    fn from_index(i: usize) -> Option<Self> {
        Self::try_from(i).ok()
    }
}

impl Coord for u32 {
    type Dist = u64;

    #[inline]
    fn abs_diff(a: Self, b: Self) -> Self::Dist {
        u64::from(a.abs_diff(b))
    }

    #[inline]
    fn from_index(i: usize) -> Option<Self> {
        Self::try_from(i).ok()
    }
}

impl Coord for usize {
    type Dist = u128;

    #[inline]
    fn abs_diff(a: Self, b: Self) -> Self::Dist {
        // usize is at most 64 bits on every supported target.
        a.abs_diff(b) as u128
    }

    #[inline]
    fn from_index(i: usize) -> Option<Self> {
        Some(i)
    }
}

/// Helper alias for the distance type associated with a coordinate `T`.
pub type DistOf<T> = <T as Coord>::Dist;

/// Result of a nearest-seed query: the winning label and its L1 distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Nearest<D> {
    /// Label (index into the seed set) of the nearest seed.
    pub label: usize,
    /// L1 distance from the query to that seed.
    pub distance: D,
}

impl<D: Ord + Copy> Nearest<D> {
    /// Create a query result.
    pub const fn new(label: usize, distance: D) -> Self {
        Self { label, distance }
    }

    /// Whether a candidate at `distance` with `label` beats this result.
    ///
    /// Smaller distance wins; on equal distance the smaller label wins.
    #[inline]
    pub fn is_beaten_by(&self, label: usize, distance: D) -> bool {
        distance < self.distance || (distance == self.distance && label < self.label)
    }

    /// Replace this result with the candidate if it wins. Returns whether it did.
    #[inline]
    pub fn offer(&mut self, label: usize, distance: D) -> bool {
        if self.is_beaten_by(label, distance) {
            self.label = label;
            self.distance = distance;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l1_is_symmetric_and_widened() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        let d = a.l1(&b);
        assert_eq!(d, 2 * u64::from(u32::MAX));
        assert_eq!(d, b.l1(&a));
    }

    #[test]
    fn l1_matches_manhattan() {
        let a = Point::new(1_i64, 2);
        let b = Point::new(3_i64, -2);
        assert_eq!(a.l1(&b), 6);
        assert_eq!(a.l1(&a), 0);
    }

    #[test]
    fn axis_alternates_by_depth() {
        assert_eq!(Axis::at_depth(0), Axis::Row);
        assert_eq!(Axis::at_depth(1), Axis::Col);
        assert_eq!(Axis::at_depth(2), Axis::Row);
        assert_eq!(Axis::Row.next(), Axis::Col);
        assert_eq!(Axis::Col.next(), Axis::Row);
    }

    #[test]
    fn offer_prefers_lower_label_on_ties() {
        let mut best = Nearest::new(3, 5_u64);
        assert!(!best.offer(4, 5));
        assert!(best.offer(1, 5));
        assert_eq!(best, Nearest::new(1, 5));
        assert!(best.offer(7, 4));
        assert_eq!(best, Nearest::new(7, 4));
        assert!(!best.offer(0, 9));
    }

    #[test]
    fn from_index_rejects_unrepresentable() {
        assert_eq!(<u32 as Coord>::from_index(7), Some(7));
        assert_eq!(<i32 as Coord>::from_index(usize::MAX), None);
        assert_eq!(<usize as Coord>::from_index(usize::MAX), Some(usize::MAX));
    }
}
