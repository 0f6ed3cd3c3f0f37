//! Remove operation, including the cascading prune of emptied subtrees.

use crate::tree::Node;

impl Node {
    /// Remove `value` from this subtree.
    ///
    /// Returns `true` if the key was present and removed, `false` if it was
    /// not a member. A failed remove leaves the subtree untouched.
    ///
    /// # Algorithm
    /// Removing the cached minimum is the delicate case: the minimum has no
    /// copy in the clusters, so the smallest clustered key is promoted into
    /// the cache and *that* key (now duplicated) becomes the deletion
    /// target for the recursive descent. After the descent, a cluster that
    /// emptied out is pruned and its index removed from the summary, which
    /// cascades the same way one level up. Finally the cached maximum is
    /// recomputed if it was the key removed.
    pub(crate) fn remove(&mut self, mut value: u64) -> bool {
        let (min, max) = match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            _ => return false,
        };

        // Members always satisfy min <= value <= max.
        if value < min || value > max {
            return false;
        }

        if min == max {
            if value != min {
                return false;
            }
            self.min = None;
            self.max = None;
            return true;
        }

        // At least two keys from here on.
        if self.is_leaf() {
            // Base case holding both of {0, 1}: keep the other one.
            let kept = 1 - value;
            self.min = Some(kept);
            self.max = Some(kept);
            return true;
        }

        if value == min {
            // Promote the smallest clustered key into the cache; it is now
            // duplicated, so it becomes the key to delete below.
            value = match self.clustered_min() {
                Some(promoted) => promoted,
                None => return false,
            };
            self.min = Some(value);
        }

        let high = self.high(value);
        let low = self.low(value);

        let cluster = match self.cluster_mut(high) {
            Some(cluster) => cluster,
            None => return false,
        };
        if !cluster.remove(low) {
            return false;
        }
        if cluster.is_empty() {
            self.prune_cluster(high);
        }

        if value == max {
            // The removed key was the cached maximum; pull the new one up
            // from the last occupied cluster, or collapse onto the minimum
            // when no cluster remains.
            self.max = self.clustered_max().or(self.min);
        }

        true
    }

    /// Drop the emptied cluster at `high` and erase its summary entry.
    ///
    /// When the summary empties as well, it is dropped and the cluster
    /// array released, restoring the node to its never-recursed shape.
    fn prune_cluster(&mut self, high: u64) {
        self.clusters[high as usize] = None;

        if let Some(summary) = self.summary.as_deref_mut() {
            summary.remove(high);
            if summary.is_empty() {
                self.summary = None;
                self.clusters = alloc::vec::Vec::new();
            }
        }
    }
}
