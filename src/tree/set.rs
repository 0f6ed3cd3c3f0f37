//! Public set API over the recursive node structure.

use crate::tree::{Iter, Node};
use crate::universe::round_up_pow2;

/// Ordered integer set with doubly-logarithmic operations.
///
/// Keys are drawn from a fixed universe `[0, U)` chosen at construction,
/// where `U` is the requested capacity rounded up to a power of two.
/// Insert, remove, contains, successor and predecessor all run in
/// O(log log U); min and max are O(1) reads of the root cache.
///
/// # Architecture
/// - Recursive square-root decomposition: each node splits keys into a
///   cluster-selecting high half and a within-cluster low half
/// - Cached min/max per node; the minimum is *not* duplicated in the
///   recursive structure, which is what keeps mutations cheap
/// - Lazy allocation: summary and cluster subtrees appear on first insert
///   that needs them and are pruned as soon as a deletion empties them
///
/// # Failure model
/// Every operation reports failure as a value (`false` / `None`) and a
/// failed call never modifies the set: out-of-range keys, duplicate
/// inserts and removes of missing keys are all rejected without side
/// effects.
///
/// # Example
/// ```rust
/// use veb_fast_set::VebSet;
///
/// let mut set = VebSet::new(16).unwrap();
/// assert!(set.insert(3));
/// assert!(set.insert(8));
/// assert!(!set.insert(3)); // duplicate
///
/// assert_eq!(set.min(), Some(3));
/// assert_eq!(set.successor(3), Some(8));
/// assert!(set.remove(3));
/// assert_eq!(set.min(), Some(8));
/// ```
#[derive(Debug)]
pub struct VebSet {
    /// Root of the recursive decomposition.
    root: Node,

    /// Number of keys stored in the set.
    len: usize,
}

impl VebSet {
    /// Create an empty set over `[0, round_up_pow2(capacity))`.
    ///
    /// Returns `None` when `capacity` is zero or exceeds 2^63 (the largest
    /// capacity whose enclosing power of two still fits in `u64`). The
    /// universe is fixed for the lifetime of the set.
    ///
    /// # Example
    /// ```rust
    /// use veb_fast_set::VebSet;
    ///
    /// let set = VebSet::new(17).unwrap();
    /// assert_eq!(set.universe(), 32);
    /// assert!(VebSet::new(0).is_none());
    /// ```
    pub fn new(capacity: u64) -> Option<Self> {
        let universe = round_up_pow2(capacity)?;
        Some(VebSet {
            root: Node::new(universe),
            len: 0,
        })
    }

    /// Size of the key universe; keys range over `[0, universe)`.
    #[inline]
    pub fn universe(&self) -> u64 {
        self.root.universe
    }

    /// Number of keys in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a key.
    ///
    /// Returns `true` if the key was newly inserted, `false` if it was
    /// already present or lies outside `[0, universe)`.
    pub fn insert(&mut self, key: u64) -> bool {
        if key >= self.universe() {
            return false;
        }
        let inserted = self.root.insert(key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove a key.
    ///
    /// Returns `true` if the key was present and removed, `false` if it
    /// was missing or out of range. Subtrees emptied by the removal are
    /// pruned all the way up.
    pub fn remove(&mut self, key: u64) -> bool {
        if key >= self.universe() {
            return false;
        }
        let removed = self.root.remove(key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Whether the set contains `key`. Out-of-range keys are never members.
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        key < self.universe() && self.root.contains(key)
    }

    /// Smallest key in the set, or `None` when empty. O(1).
    #[inline]
    pub fn min(&self) -> Option<u64> {
        self.root.min
    }

    /// Largest key in the set, or `None` when empty. O(1).
    #[inline]
    pub fn max(&self) -> Option<u64> {
        self.root.max
    }

    /// Smallest member strictly greater than `key`, or `None`.
    ///
    /// To ask for the overall first key (the classical "successor of the
    /// before-the-range sentinel"), use [`VebSet::min`] instead.
    pub fn successor(&self, key: u64) -> Option<u64> {
        if key >= self.universe() {
            return None;
        }
        self.root.successor(key)
    }

    /// Largest member strictly less than `key`, or `None`.
    ///
    /// `key` may equal [`VebSet::universe`], in which case this returns the
    /// overall maximum; anything larger is out of range and yields `None`.
    pub fn predecessor(&self, key: u64) -> Option<u64> {
        if key > self.universe() {
            return None;
        }
        self.root.predecessor(key)
    }

    /// Remove all keys, keeping the universe.
    ///
    /// Equivalent to a freshly constructed set of the same capacity.
    pub fn clear(&mut self) {
        self.root = Node::new(self.universe());
        self.len = 0;
    }

    /// Iterate over the keys in ascending order.
    ///
    /// Each step is one successor query, so full iteration costs
    /// O(n log log U).
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl<'a> IntoIterator for &'a VebSet {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
