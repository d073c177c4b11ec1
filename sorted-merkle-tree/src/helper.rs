/// Returns `true` if `n` is a power of two.
///
/// `0` is treated as a power of two, so `next_power_of_two(0)` stays `0`.
pub fn is_power_of_two(n: u64) -> bool {
    n & n.wrapping_sub(1) == 0
}

/// Smallest power of two that is `>= n`.
///
/// `n = 0` yields `0`; an empty leaf set has no meaningful tree shape and the
/// builder rejects it before reaching this point.
///
/// # Arithmetic
///
/// Returns `0` when the result does not fit in a `u64` (`n > 2^63`).
pub fn next_power_of_two(n: u64) -> u64 {
    if is_power_of_two(n) {
        return n;
    }
    n.checked_next_power_of_two().unwrap_or(0)
}

/// Number of levels above the leaf layer for a power-of-two leaf count.
pub(crate) fn depth_for_leaf_count(leaf_count: usize) -> u32 {
    leaf_count.trailing_zeros()
}
