// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static k-d tree backend for nearest-seed queries under L1.

use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::debug;

use crate::searcher::Searcher;
use crate::seeds::SeedSet;
use crate::types::{Axis, Coord, Nearest, Point};

/// Leaf bucket size used by [`KdTree::build`].
pub const DEFAULT_LEAF_SIZE: usize = 8;

/// Balanced k-d tree over a seed set, built once and immutable afterwards.
///
/// Internal nodes hold a median pivot seed and split on rows at even depths
/// and columns at odd depths. Subsets of at most `leaf_size` seeds are stored
/// in leaves. Queries return the same result as [`BruteForce`], including
/// the lowest-label tie-break.
///
/// [`BruteForce`]: crate::BruteForce
pub struct KdTree<T: Coord> {
    leaf_size: usize,
    len: usize,
    root: NodeIdx,
    arena: Vec<Node<T>>,
}

#[derive(Copy, Clone, Debug)]
struct Seed<T> {
    label: usize,
    point: Point<T>,
}

enum Kind<T> {
    /// Seeds sorted by label.
    Leaf(Vec<Seed<T>>),
    /// `left` holds seeds ordered before `pivot` on `axis` (axis value <= pivot's),
    /// `right` those ordered after it (axis value >= pivot's).
    Internal {
        axis: Axis,
        pivot: Seed<T>,
        left: Option<NodeIdx>,
        right: Option<NodeIdx>,
    },
}

struct Node<T> {
    /// Smallest label anywhere in this subtree.
    min_label: usize,
    kind: Kind<T>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

impl<T: Coord> KdTree<T> {
    /// Build a tree with [`DEFAULT_LEAF_SIZE`].
    pub fn build(seeds: &SeedSet<T>) -> Self {
        Self::with_leaf_size(seeds, DEFAULT_LEAF_SIZE)
    }

    /// Build a tree whose leaves hold at most `leaf_size` seeds (clamped to at least 1).
    ///
    /// The leaf size only affects query cost, never query results.
    pub fn with_leaf_size(seeds: &SeedSet<T>, leaf_size: usize) -> Self {
        let leaf_size = leaf_size.max(1);
        let mut items: Vec<Seed<T>> = seeds
            .iter()
            .map(|(label, point)| Seed { label, point })
            .collect();
        let mut arena = Vec::with_capacity(2 * seeds.len() / leaf_size + 1);
        let root = Self::build_node(&mut arena, &mut items, Axis::Row, leaf_size);
        let tree = Self {
            leaf_size,
            len: seeds.len(),
            root,
            arena,
        };
        debug!(
            seeds = tree.len,
            nodes = tree.arena.len(),
            depth = tree.depth(),
            leaf_size,
            "built k-d tree"
        );
        tree
    }

    /// Number of seeds in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: seed sets are never empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of seeds stored in one leaf.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Number of nodes (internal and leaf).
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = Vec::from([(self.root, 1_usize)]);
        while let Some((idx, d)) = stack.pop() {
            max = max.max(d);
            if let Kind::Internal { left, right, .. } = &self.arena[idx.get()].kind {
                stack.extend(left.iter().chain(right.iter()).map(|c| (*c, d + 1)));
            }
        }
        max
    }

    /// Recursively partition `items` (non-empty) and return the index of the new subtree.
    fn build_node(
        arena: &mut Vec<Node<T>>,
        items: &mut [Seed<T>],
        axis: Axis,
        leaf_size: usize,
    ) -> NodeIdx {
        debug_assert!(!items.is_empty(), "k-d subtrees are never empty");
        let idx = arena.len();
        if items.len() <= leaf_size {
            let mut leaf = items.to_vec();
            leaf.sort_unstable_by_key(|s| s.label);
            arena.push(Node {
                min_label: leaf[0].label,
                kind: Kind::Leaf(leaf),
            });
            return NodeIdx::new(idx);
        }

        // Median by (axis value, label): labels are unique, so the order is total
        // and the split does not depend on the input order.
        let mid = items.len() / 2;
        let (lo, pivot, hi) =
            items.select_nth_unstable_by_key(mid, |s| (s.point.get(axis), s.label));
        let pivot = *pivot;

        // Reserve this node's slot before building children.
        arena.push(Node {
            min_label: pivot.label,
            kind: Kind::Leaf(Vec::new()),
        });
        let left = (!lo.is_empty()).then(|| Self::build_node(arena, lo, axis.next(), leaf_size));
        let right = (!hi.is_empty()).then(|| Self::build_node(arena, hi, axis.next(), leaf_size));

        let min_label = [left, right]
            .into_iter()
            .flatten()
            .map(|c| arena[c.get()].min_label)
            .fold(pivot.label, usize::min);
        arena[idx] = Node {
            min_label,
            kind: Kind::Internal {
                axis,
                pivot,
                left,
                right,
            },
        };
        NodeIdx::new(idx)
    }

    /// Any seed stored at the root, used to seed the running best.
    fn root_seed(&self) -> Seed<T> {
        match &self.arena[self.root.get()].kind {
            Kind::Leaf(seeds) => seeds[0],
            Kind::Internal { pivot, .. } => *pivot,
        }
    }

    fn search(&self, idx: NodeIdx, query: Point<T>, best: &mut Nearest<T::Dist>) {
        match &self.arena[idx.get()].kind {
            Kind::Leaf(seeds) => {
                for s in seeds {
                    best.offer(s.label, query.l1(&s.point));
                }
            }
            Kind::Internal {
                axis,
                pivot,
                left,
                right,
            } => {
                best.offer(pivot.label, query.l1(&pivot.point));
                let q = query.get(*axis);
                let p = pivot.point.get(*axis);
                let (near, far) = if q <= p {
                    (*left, *right)
                } else {
                    (*right, *left)
                };
                if let Some(near) = near {
                    self.search(near, query, best);
                }
                // Every seed on the far side is at least `|q - p|` away and has a
                // label no smaller than the subtree minimum.
                if let Some(far) = far
                    && best.is_beaten_by(self.arena[far.get()].min_label, T::abs_diff(q, p))
                {
                    self.search(far, query, best);
                }
            }
        }
    }
}

impl<T: Coord> Searcher<T> for KdTree<T> {
    fn nearest(&self, query: Point<T>) -> Nearest<T::Dist> {
        let start = self.root_seed();
        let mut best = Nearest::new(start.label, query.l1(&start.point));
        self.search(self.root, query, &mut best);
        best
    }

    fn seed_count(&self) -> usize {
        self.len
    }
}

impl<T: Coord> Debug for KdTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("seeds", &self.len)
            .field("leaf_size", &self.leaf_size)
            .field("arena_nodes", &self.arena.len())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

/// k-d tree with `i32` coordinates and `u64` distances.
pub type KdTreeI32 = KdTree<i32>;

/// k-d tree with `i64` coordinates and `u128` distances.
pub type KdTreeI64 = KdTree<i64>;
