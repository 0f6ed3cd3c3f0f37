//! Iterator support: ascending traversal by successor chaining.

use crate::tree::VebSet;

/// Iterator over the set's keys in ascending order.
///
/// Starts at the cached minimum and advances with one successor query per
/// step, so the iterator holds no traversal state beyond the next key to
/// yield and stays valid-by-construction for the borrowed set.
pub struct Iter<'a> {
    set: &'a VebSet,

    /// Next key to yield; `None` once the traversal passed the maximum.
    next: Option<u64>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a VebSet) -> Self {
        Iter {
            set,
            next: set.min(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = self.set.successor(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, Some(self.set.len())),
            None => (0, Some(0)),
        }
    }
}
