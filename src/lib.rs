//! # veb-fast-set
//!
//! Ordered integer set over a fixed power-of-two universe `[0, U)`.
//! O(1) min/max. Stable O(log log U) insert, remove, contains,
//! successor and predecessor.
//!
//! The set is a recursive square-root decomposition: each node caches its
//! minimum and maximum and delegates everything else to a *summary* subtree
//! (which clusters are occupied) and an array of *cluster* subtrees (the
//! keys themselves, split into high and low halves). Recursion depth halves
//! the key width at every level, which is where the doubly-logarithmic
//! bound comes from.
//!
//! ## Features
//! - O(1) min/max
//! - O(log log U) insert, remove, contains, successor, predecessor
//! - Lazy allocation: summary and cluster nodes are created on first use
//!   and pruned as soon as they empty out
//! - no_std compatible (requires alloc)

#![no_std]

extern crate alloc;

mod constants;
mod tree;
mod universe;

pub use tree::{Iter, VebSet};
