//! Recursive node for the square-root decomposition.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::constants::MIN_UNIVERSE;
use crate::universe::low_bits;

/// One level of the recursive decomposition.
///
/// A node represents a set of keys drawn from `[0, universe)`. The smallest
/// member is cached in `min` and lives *only* there; every other member `v`
/// is stored as `low(v)` inside `clusters[high(v)]`. The largest member is
/// cached in `max` but, unlike the minimum, is also materialized in its
/// cluster. The summary subtree tracks exactly the set of non-empty cluster
/// indices, which is what lets successor/predecessor hop between clusters
/// in a single recursive call.
///
/// # Shape
/// `universe` and the split exponent are fixed at construction and never
/// change. Subtrees are allocated lazily and pruned eagerly:
/// - `summary` exists only while at least one cluster is occupied
/// - `clusters` stays an empty `Vec` until the node first recurses, and is
///   released again once the last cluster empties
/// - a base-case node (`universe == 2`) never allocates either
///
/// # Memory Layout
/// 56 bytes per node before children: two `Option<u64>` caches, the
/// universe/split pair, one owning pointer and one `Vec` header. Children
/// are `Option<Box<Node>>`, so an absent subtree costs a null-pointer-sized
/// slot and nothing else.
#[derive(Debug)]
pub(crate) struct Node {
    /// Number of representable keys at this level; power of two, >= 2.
    pub(crate) universe: u64,

    /// Bits in the low half of a key: `lowSplit == 1 << low_bits`.
    pub(crate) low_bits: u32,

    /// Smallest member, or `None` when the node's set is empty.
    ///
    /// Never duplicated inside `clusters` (the space-saving invariant).
    pub(crate) min: Option<u64>,

    /// Largest member, or `None` when the node's set is empty.
    ///
    /// Equal to `min` when the node holds exactly one key; otherwise also
    /// present in its cluster.
    pub(crate) max: Option<u64>,

    /// Occupancy subtree over cluster indices; universe `highSplit`.
    pub(crate) summary: Option<Box<Node>>,

    /// `highSplit` optional subtrees, each of universe `lowSplit`.
    ///
    /// Empty `Vec` while the node has never recursed (or has been fully
    /// pruned back); otherwise exactly `highSplit` slots.
    pub(crate) clusters: Vec<Option<Box<Node>>>,
}

impl Node {
    /// Create an empty node over the given universe.
    ///
    /// `universe` must be a power of two `>= 2`; callers derive it via
    /// `universe::round_up_pow2` or from a parent's split.
    pub(crate) fn new(universe: u64) -> Self {
        debug_assert!(universe.is_power_of_two());
        debug_assert!(universe >= MIN_UNIVERSE);
        Node {
            universe,
            low_bits: low_bits(universe),
            min: None,
            max: None,
            summary: None,
            clusters: Vec::new(),
        }
    }

    /// Number of keys each cluster covers (`2^floor(log2(U)/2)`).
    #[inline(always)]
    pub(crate) fn low_split(&self) -> u64 {
        1 << self.low_bits
    }

    /// Number of clusters, and the summary's universe (`2^ceil(log2(U)/2)`).
    #[inline(always)]
    pub(crate) fn high_split(&self) -> u64 {
        self.universe >> self.low_bits
    }

    /// Within-cluster part of `value`.
    #[inline(always)]
    pub(crate) fn low(&self, value: u64) -> u64 {
        value & (self.low_split() - 1)
    }

    /// Cluster-selecting part of `value`.
    #[inline(always)]
    pub(crate) fn high(&self, value: u64) -> u64 {
        value >> self.low_bits
    }

    /// Recompose a key from its cluster index and within-cluster part.
    ///
    /// Inverse of the `high`/`low` pair: `index(high(v), low(v)) == v`.
    #[inline(always)]
    pub(crate) fn index(&self, high: u64, low: u64) -> u64 {
        (high << self.low_bits) | low
    }

    /// Whether the node's set is empty.
    ///
    /// An empty node is eligible for pruning by its owner.
    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Whether this node is the two-key base case.
    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.universe <= MIN_UNIVERSE
    }

    /// Borrow the cluster at index `high`, if it exists.
    #[inline]
    pub(crate) fn cluster(&self, high: u64) -> Option<&Node> {
        self.clusters.get(high as usize).and_then(|c| c.as_deref())
    }

    /// Mutably borrow the cluster at index `high`, if it exists.
    #[inline]
    pub(crate) fn cluster_mut(&mut self, high: u64) -> Option<&mut Node> {
        self.clusters
            .get_mut(high as usize)
            .and_then(|c| c.as_deref_mut())
    }

    /// Borrow the cluster at index `high`, creating it (and the cluster
    /// array) on first use.
    pub(crate) fn cluster_or_insert(&mut self, high: u64) -> &mut Node {
        debug_assert!(high < self.high_split());
        if self.clusters.is_empty() {
            let slots = self.high_split() as usize;
            self.clusters.resize_with(slots, || None);
        }
        let low_split = self.low_split();
        self.clusters[high as usize].get_or_insert_with(|| Box::new(Node::new(low_split)))
    }

    /// Borrow the summary, creating it on first use.
    pub(crate) fn summary_or_insert(&mut self) -> &mut Node {
        let high_split = self.high_split();
        self.summary
            .get_or_insert_with(|| Box::new(Node::new(high_split)))
    }

    /// Smallest key currently stored in the clusters, recomposed.
    ///
    /// `None` when no cluster is occupied (set has at most the cached
    /// minimum).
    pub(crate) fn clustered_min(&self) -> Option<u64> {
        let high = self.summary.as_deref()?.min?;
        let low = self.cluster(high)?.min?;
        Some(self.index(high, low))
    }

    /// Largest key currently stored in the clusters, recomposed.
    pub(crate) fn clustered_max(&self) -> Option<u64> {
        let high = self.summary.as_deref()?.max?;
        let low = self.cluster(high)?.max?;
        Some(self.index(high, low))
    }
}
