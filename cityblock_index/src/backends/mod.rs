// Copyright 2025 the Cityblock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different search strategies.
//!
//! - `brute_force`: linear scan over every seed (O(N) per query, no build step).
//! - `kdtree`: balanced k-d tree built once (O(log N) expected per query).
//!
//! Both backends answer with the same [`Nearest`](crate::Nearest) for every
//! query, so a rasterization produces identical labels with either one.
//!
//! Tie-break note
//! --------------
//! A linear scan keeps the first seed it sees at the minimum distance, which is
//! the lowest label. A tree visits seeds in spatial order instead, so it compares
//! candidates on `(distance, label)` and only prunes a subtree whose distance
//! bound is larger than the best distance, or equal to it while every label in
//! the subtree is larger than the best label.

pub mod brute_force;
pub mod kdtree;
