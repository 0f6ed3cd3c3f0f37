//! Insert operation.

use crate::tree::Node;

impl Node {
    /// Insert `value` into this subtree.
    ///
    /// Returns `true` if the key was newly inserted, `false` if it already
    /// existed. A failed insert leaves the subtree untouched.
    ///
    /// Callers guarantee `value < self.universe`; the public wrapper
    /// range-checks before descending, and recursive calls pass split
    /// halves that are in range by construction.
    ///
    /// # Algorithm
    /// The cached minimum lives only at this level, so inserting a key
    /// below it swaps the two: the new key takes over the cache and the old
    /// minimum is the one pushed down into the clusters. A key above the
    /// cached maximum updates the cache *and* descends, because the maximum
    /// is always materialized in its cluster as well. When the target
    /// cluster is about to receive its first key, the summary learns about
    /// it first, and that summary insert recurses over a universe of only
    /// `highSplit` — the halving that gives O(log log U).
    pub(crate) fn insert(&mut self, mut value: u64) -> bool {
        debug_assert!(value < self.universe);

        let (min, max) = match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                // Empty node: the first key lives purely in the cache.
                self.min = Some(value);
                self.max = Some(value);
                return true;
            }
        };

        if value == min || value == max {
            return false;
        }

        if value < min {
            // New overall minimum: cache it here and push the old minimum
            // down instead.
            self.min = Some(value);
            value = min;
        }

        if value > max {
            self.max = Some(value);
        }

        if self.is_leaf() {
            // Two-key universe: min/max now describe the full set.
            return true;
        }

        let high = self.high(value);
        let low = self.low(value);

        if self.cluster(high).is_none() {
            // First key in this cluster: record the index in the summary
            // before descending.
            let recorded = self.summary_or_insert().insert(high);
            debug_assert!(recorded, "summary out of sync with empty cluster");
        }

        self.cluster_or_insert(high).insert(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty() {
        let mut node = Node::new(16);
        assert!(node.insert(9));
        assert_eq!(node.min, Some(9));
        assert_eq!(node.max, Some(9));
        // Single key needs no recursion at all.
        assert!(node.summary.is_none());
        assert!(node.clusters.is_empty());
    }

    #[test]
    fn test_insert_duplicate_fails() {
        let mut node = Node::new(16);
        assert!(node.insert(9));
        assert!(!node.insert(9));
        assert_eq!(node.min, Some(9));
        assert_eq!(node.max, Some(9));
    }

    #[test]
    fn test_insert_duplicate_interior_fails() {
        let mut node = Node::new(16);
        for value in [2, 7, 11] {
            assert!(node.insert(value));
        }
        // 7 is neither cached min nor max; the duplicate is caught in the
        // cluster recursion.
        assert!(!node.insert(7));
        assert_eq!(node.min, Some(2));
        assert_eq!(node.max, Some(11));
    }

    #[test]
    fn test_insert_below_min_swaps() {
        let mut node = Node::new(16);
        assert!(node.insert(9));
        assert!(node.insert(3));
        assert_eq!(node.min, Some(3));
        assert_eq!(node.max, Some(9));
        // The old minimum 9 was pushed into cluster high(9) = 2.
        let cluster = node.cluster(2).expect("cluster for pushed-down key");
        assert_eq!(cluster.min, Some(1));
    }

    #[test]
    fn test_insert_above_max_still_descends() {
        let mut node = Node::new(16);
        assert!(node.insert(3));
        assert!(node.insert(9));
        assert_eq!(node.max, Some(9));
        // Unlike the minimum, the maximum is also stored in its cluster.
        assert!(node.cluster(2).is_some());
    }

    #[test]
    fn test_insert_tracks_summary() {
        let mut node = Node::new(16);
        assert!(node.insert(0));
        assert!(node.insert(5));
        assert!(node.insert(6));
        assert!(node.insert(14));

        // Keys 5, 6 share cluster 1; key 14 is alone in cluster 3. The
        // summary holds exactly the occupied indices.
        let summary = node.summary.as_deref().expect("summary allocated");
        assert_eq!(summary.min, Some(1));
        assert_eq!(summary.max, Some(3));
        assert!(node.cluster(1).is_some());
        assert!(node.cluster(2).is_none());
    }

    #[test]
    fn test_insert_base_case_pair() {
        let mut node = Node::new(2);
        assert!(node.insert(1));
        assert!(node.insert(0));
        assert_eq!(node.min, Some(0));
        assert_eq!(node.max, Some(1));
        assert!(node.clusters.is_empty());
        assert!(!node.insert(0));
        assert!(!node.insert(1));
    }

    #[test]
    fn test_insert_all_of_small_universe() {
        let mut node = Node::new(8);
        for value in 0..8 {
            assert!(node.insert(value), "fresh insert of {value}");
        }
        for value in 0..8 {
            assert!(!node.insert(value), "duplicate insert of {value}");
        }
        assert_eq!(node.min, Some(0));
        assert_eq!(node.max, Some(7));
    }
}
