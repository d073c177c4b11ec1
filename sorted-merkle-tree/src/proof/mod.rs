//! Inclusion proofs and their verification.
//!
//! A `MerkleProof` is the ordered list of co-path hashes from a leaf up to the
//! root, one per level. Verification needs no tree: starting from the leaf,
//! each sibling is folded in with `sort_and_hash`, and the final value must
//! equal the root.

use crate::hash::sort_and_hash;


/// Sibling hashes from leaf level to root level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MerkleProof {
    siblings: Vec<[u8; 32]>,
}

impl MerkleProof {
    /// Wrap an ordered list of sibling hashes (leaf level first).
    pub fn new(siblings: Vec<[u8; 32]>) -> Self {
        Self { siblings }
    }

    /// The sibling hashes, leaf level first.
    pub fn siblings(&self) -> &[[u8; 32]] {
        &self.siblings
    }

    /// Number of levels covered by this proof.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof has no entries.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Consume the proof, returning the sibling hashes.
    pub fn into_siblings(self) -> Vec<[u8; 32]> {
        self.siblings
    }

    /// Recompute the root implied by this proof for `leaf`.
    ///
    /// An empty proof returns `leaf` itself.
    pub fn calculate_root(&self, leaf: &[u8; 32]) -> [u8; 32] {
        self.siblings
            .iter()
            .fold(*leaf, |node, sibling| sort_and_hash(&node, sibling))
    }

    /// Verify this proof for `leaf` against `root`.
    pub fn verify(&self, root: &[u8; 32], leaf: &[u8; 32]) -> bool {
        &self.calculate_root(leaf) == root
    }
}

impl From<Vec<[u8; 32]>> for MerkleProof {
    fn from(siblings: Vec<[u8; 32]>) -> Self {
        Self::new(siblings)
    }
}

impl AsRef<[[u8; 32]]> for MerkleProof {
    fn as_ref(&self) -> &[[u8; 32]] {
        &self.siblings
    }
}

/// Verify a Merkle branch against a root.
///
/// Folds every entry of `proof` into the running value with `sort_and_hash`,
/// starting from `leaf`, and compares the result with `root` byte for byte.
/// Never fails: inputs of the wrong length or a mismatched path return
/// `false`. With an empty proof this succeeds only if `leaf == root`.
pub fn verify_merkle_branch<P: AsRef<[u8]>>(root: &[u8], leaf: &[u8], proof: &[P]) -> bool {
    let computed = proof.iter().fold(leaf.to_vec(), |node, sibling| {
        sort_and_hash(&node, sibling.as_ref()).to_vec()
    });
    root == computed.as_slice()
}
