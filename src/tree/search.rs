//! Query operations: membership, successor and predecessor.

use crate::tree::Node;

impl Node {
    /// Whether `value` is a member of this subtree.
    ///
    /// The cached min/max answer most probes without recursion; everything
    /// else is one descent into the owning cluster.
    pub(crate) fn contains(&self, value: u64) -> bool {
        let (min, max) = match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            _ => return false,
        };
        if value == min || value == max {
            return true;
        }
        if value < min || value > max || self.is_leaf() {
            return false;
        }
        self.cluster(self.high(value))
            .is_some_and(|cluster| cluster.contains(self.low(value)))
    }

    /// Smallest member strictly greater than `value`, if any.
    ///
    /// Descends into at most one subtree: either the successor shares
    /// `value`'s cluster (checked against that cluster's cached maximum),
    /// or the summary names the next occupied cluster, whose cached
    /// minimum is the answer.
    pub(crate) fn successor(&self, value: u64) -> Option<u64> {
        let min = self.min?;
        if min > value {
            return Some(min);
        }

        if self.is_leaf() {
            return self.max.filter(|&max| max > value);
        }

        let high = self.high(value);
        let low = self.low(value);

        if let Some(cluster) = self.cluster(high) {
            // Successor stays inside value's own cluster iff something
            // bigger than the low part lives there.
            if cluster.max.is_some_and(|cluster_max| cluster_max > low) {
                let next_low = cluster.successor(low)?;
                return Some(self.index(high, next_low));
            }
        }

        if let Some(summary) = self.summary.as_deref() {
            if let Some(next_high) = summary.successor(high) {
                let next_low = self.cluster(next_high)?.min?;
                return Some(self.index(next_high, next_low));
            }
        }

        self.max.filter(|&max| max > value)
    }

    /// Largest member strictly less than `value`, if any.
    ///
    /// Mirror image of [`Node::successor`], with one asymmetry: the cached
    /// minimum has no clustered copy, so when no earlier cluster exists it
    /// is the final fallback.
    pub(crate) fn predecessor(&self, value: u64) -> Option<u64> {
        let max = self.max?;
        if max < value {
            return Some(max);
        }

        if self.is_leaf() {
            return self.min.filter(|&min| min < value);
        }

        let high = self.high(value);
        let low = self.low(value);

        if let Some(cluster) = self.cluster(high) {
            if cluster.min.is_some_and(|cluster_min| cluster_min < low) {
                let prev_low = cluster.predecessor(low)?;
                return Some(self.index(high, prev_low));
            }
        }

        if let Some(summary) = self.summary.as_deref() {
            if let Some(prev_high) = summary.predecessor(high) {
                let prev_low = self.cluster(prev_high)?.max?;
                return Some(self.index(prev_high, prev_low));
            }
        }

        // The minimum lives only in the cache, never in a cluster.
        self.min.filter(|&min| min < value)
    }
}
