//! Leaf derivation: pad each raw item to [`LEAF_SIZE`] bytes, then hash it.

use crate::hash::{LEAF_SIZE, keccak256};

/// Copy `item` and right-pad the copy with zero bytes up to `size`.
///
/// Items that are already `size` bytes or longer are copied unchanged; padding
/// never truncates.
pub fn pad_to(item: &[u8], size: usize) -> Vec<u8> {
    let mut padded = item.to_vec();
    if padded.len() < size {
        padded.resize(size, 0);
    }
    padded
}

/// Leaf hash of a raw item: `keccak256(pad_to(item, 32))`.
pub fn leaf_hash(item: &[u8]) -> [u8; 32] {
    keccak256(&[&pad_to(item, LEAF_SIZE)])
}

/// Derive one leaf hash per item, in input order.
///
/// An empty input yields an empty leaf set; the tree builder is the one that
/// rejects it.
pub fn prepare_leaves<T: AsRef<[u8]>>(items: &[T]) -> Vec<[u8; 32]> {
    items.iter().map(|item| leaf_hash(item.as_ref())).collect()
}
