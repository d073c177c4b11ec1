use sha3::{Digest, Keccak256};

/// Width in bytes of a leaf, and of every node digest.
pub const LEAF_SIZE: usize = 32;

/// Keccak-256 of the concatenation of `parts`.
pub fn keccak256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Order two byte strings by unsigned lexicographic comparison.
///
/// Equal inputs are returned in their original order.
pub fn sort_pair<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8]) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Hash a sibling pair: `keccak256(min(a, b) || max(a, b))`.
///
/// The result depends only on the two values, not on which one sat in the
/// left slot.
pub fn sort_and_hash(a: &[u8], b: &[u8]) -> [u8; 32] {
    let (low, high) = sort_pair(a, b);
    keccak256(&[low, high])
}
