//! Universe sizing for the recursive decomposition.
//!
//! A node over universe `U = 2^k` splits every key into a high part that
//! selects one of `highSplit = 2^ceil(k/2)` clusters and a low part inside
//! that cluster's own universe of `lowSplit = 2^floor(k/2)` keys. Both
//! splits are powers of two, so decomposition is shifts and masks only.

use crate::constants::{MAX_CAPACITY, MIN_UNIVERSE};

/// Round a requested capacity up to the smallest enclosing universe.
///
/// Returns the smallest power of two `>= capacity`, clamped up to the
/// minimum universe of 2. Returns `None` for a zero capacity or one above
/// `MAX_CAPACITY`, whose enclosing power of two would not fit in `u64`.
#[inline]
pub(crate) fn round_up_pow2(capacity: u64) -> Option<u64> {
    if capacity == 0 || capacity > MAX_CAPACITY {
        return None;
    }
    Some(capacity.next_power_of_two().max(MIN_UNIVERSE))
}

/// Number of bits in the low (within-cluster) half of a key.
///
/// `floor(log2(universe) / 2)`; the high half gets the remaining
/// `ceil(log2(universe) / 2)` bits. For a non-perfect-square universe the
/// high side is the larger one, so there are at least as many clusters as
/// keys per cluster.
#[inline]
pub(crate) fn low_bits(universe: u64) -> u32 {
    debug_assert!(universe.is_power_of_two());
    debug_assert!(universe >= MIN_UNIVERSE);
    universe.trailing_zeros() / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_exact_powers() {
        assert_eq!(round_up_pow2(2), Some(2));
        assert_eq!(round_up_pow2(16), Some(16));
        assert_eq!(round_up_pow2(1 << 40), Some(1 << 40));
    }

    #[test]
    fn test_round_up_between_powers() {
        assert_eq!(round_up_pow2(3), Some(4));
        assert_eq!(round_up_pow2(17), Some(32));
        assert_eq!(round_up_pow2(1000), Some(1024));
    }

    #[test]
    fn test_round_up_clamps_to_min_universe() {
        // A capacity of 1 still yields the two-key base universe.
        assert_eq!(round_up_pow2(1), Some(2));
    }

    #[test]
    fn test_round_up_rejects_zero() {
        assert_eq!(round_up_pow2(0), None);
    }

    #[test]
    fn test_round_up_rejects_overflow() {
        assert_eq!(round_up_pow2((1 << 63) + 1), None);
        assert_eq!(round_up_pow2(u64::MAX), None);
        assert_eq!(round_up_pow2(1 << 63), Some(1 << 63));
    }

    #[test]
    fn test_low_bits_perfect_square() {
        // U = 16 = 2^4: both halves get 2 bits, lowSplit == highSplit == 4.
        assert_eq!(low_bits(16), 2);
        assert_eq!(low_bits(256), 4);
    }

    #[test]
    fn test_low_bits_odd_exponent() {
        // U = 32 = 2^5: low gets 2 bits, high gets 3 (8 clusters of 4).
        assert_eq!(low_bits(32), 2);
        assert_eq!(low_bits(2), 0);
        assert_eq!(low_bits(8), 1);
    }

    #[test]
    fn test_splits_cover_universe() {
        for exp in 1..=16 {
            let universe = 1u64 << exp;
            let low_split = 1u64 << low_bits(universe);
            let high_split = universe >> low_bits(universe);
            assert_eq!(low_split * high_split, universe);
            assert!(low_split <= high_split);
        }
    }
}
