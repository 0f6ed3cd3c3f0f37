//! Core constants for veb-fast-set.

/// Smallest universe a node may represent (the base case `{0, 1}`).
///
/// Nodes at this size never allocate a summary or clusters; their whole
/// key set fits in the cached min/max pair.
pub(crate) const MIN_UNIVERSE: u64 = 2;

/// Largest accepted construction capacity (2^63).
///
/// Rounding a capacity above this up to a power of two would overflow
/// `u64`, so `VebSet::new` rejects it.
pub(crate) const MAX_CAPACITY: u64 = 1 << 63;
