use crate::{
    Result, SortedMerkleError,
    hash::sort_and_hash,
    helper::{depth_for_leaf_count, next_power_of_two},
    leaf::prepare_leaves,
    proof::MerkleProof,
};

/// A sorted-pair binary Merkle tree.
///
/// Layer 0 holds the normalized leaves: sorted, evened out, and padded to a
/// power of two by repeating the last two leaves. Only the prefix before the
/// padding is in sorted order; the padding repeats values from that prefix.
/// Every higher layer is half the size of the one below, each entry being
/// `sort_and_hash` of the pair at positions `2k` and `2k + 1`. The last layer
/// holds the root alone.
///
/// The tree is immutable once built. Any change to the item set requires a
/// full rebuild, and shared references can be read from several threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedMerkleTree {
    layers: Vec<Vec<[u8; 32]>>,
    sorted_len: usize,
    depth: u32,
}

impl SortedMerkleTree {
    /// Build a tree from raw items.
    ///
    /// Each item is zero-padded to 32 bytes (never truncated) and hashed with
    /// Keccak-256 to form its leaf. Input order does not affect the root.
    pub fn from_items<T: AsRef<[u8]>>(items: &[T]) -> Result<Self> {
        if items.is_empty() {
            return Err(SortedMerkleError::EmptyInput);
        }
        Self::build(prepare_leaves(items))
    }

    /// Build a tree from leaves that are already hashed.
    ///
    /// Leaves are taken verbatim (copied, not rehashed).
    pub fn from_hashed_items(leaves: &[[u8; 32]]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(SortedMerkleError::EmptyInput);
        }
        Self::build(leaves.to_vec())
    }

    fn build(mut leaves: Vec<[u8; 32]>) -> Result<Self> {
        let input_count = leaves.len();
        let Some(&greatest) = leaves.iter().max() else {
            return Err(SortedMerkleError::EmptyInput);
        };

        leaves.sort();

        // Odd count: duplicate the greatest leaf.
        if leaves.len() % 2 == 1 {
            leaves.push(greatest);
        }

        let sorted_len = leaves.len();

        // Repeat the last pair until the count is a power of two.
        let target = next_power_of_two(leaves.len() as u64) as usize;
        while leaves.len() < target {
            let last_pair = [leaves[leaves.len() - 2], leaves[leaves.len() - 1]];
            leaves.extend_from_slice(&last_pair);
        }

        let depth = depth_for_leaf_count(leaves.len());
        let mut layers = Vec::with_capacity(depth as usize + 1);
        layers.push(leaves);
        for level in 0..depth as usize {
            let parents: Vec<[u8; 32]> = layers[level]
                .chunks_exact(2)
                .map(|pair| sort_and_hash(&pair[0], &pair[1]))
                .collect();
            layers.push(parents);
        }

        tracing::debug!(
            input_count,
            sorted_len,
            leaf_count = layers[0].len(),
            depth,
            "built sorted merkle tree"
        );

        Ok(Self {
            layers,
            sorted_len,
            depth,
        })
    }

    /// The Merkle root.
    pub fn root(&self) -> [u8; 32] {
        self.layers[self.depth as usize][0]
    }

    /// The normalized leaf layer (sorted, evened and padded), not the caller's
    /// original order.
    pub fn items(&self) -> &[[u8; 32]] {
        &self.layers[0]
    }

    /// Number of levels above the leaf layer. Always at least 1.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of leaves in the normalized leaf layer.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// The layer at `level` (0 is the leaf layer, `depth()` is the root).
    pub fn layer(&self, level: usize) -> Option<&[[u8; 32]]> {
        self.layers.get(level).map(Vec::as_slice)
    }

    /// Index of the first occurrence of `leaf` in the leaf layer.
    pub fn position(&self, leaf: &[u8]) -> Option<usize> {
        let leaves = &self.items()[..self.sorted_len];
        let index = leaves.partition_point(|candidate| candidate.as_slice() < leaf);
        (index < leaves.len() && leaves[index].as_slice() == leaf).then_some(index)
    }

    /// Whether `leaf` is part of the leaf layer.
    pub fn contains(&self, leaf: &[u8]) -> bool {
        self.position(leaf).is_some()
    }

    /// Generate the inclusion proof for `leaf`.
    ///
    /// The proof has exactly `depth()` entries. When a leaf occurs several
    /// times the proof is built from its first occurrence.
    pub fn proof(&self, leaf: &[u8]) -> Result<MerkleProof> {
        match self.position(leaf) {
            Some(position) => Ok(self.proof_from_position(position)),
            None => {
                tracing::debug!(leaf = %hex::encode(leaf), "proof requested for unknown leaf");
                Err(SortedMerkleError::LeafNotFound(leaf.to_vec()))
            }
        }
    }

    /// Generate the inclusion proof for the leaf at `index` in [`items`].
    ///
    /// [`items`]: SortedMerkleTree::items
    pub fn proof_of_index(&self, index: usize) -> Result<MerkleProof> {
        let leaf = self
            .items()
            .get(index)
            .ok_or(SortedMerkleError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count(),
            })?;
        self.proof(leaf)
    }

    /// Verify `proof` for `leaf` against this tree's root.
    pub fn verify_proof(&self, leaf: &[u8; 32], proof: &MerkleProof) -> bool {
        proof.verify(&self.root(), leaf)
    }

    /// Walk from `position` up to the root, collecting the sibling at each
    /// level. The index of a node's parent is the node's index halved.
    fn proof_from_position(&self, position: usize) -> MerkleProof {
        let mut index = position;
        let mut siblings = Vec::with_capacity(self.depth as usize);
        for layer in &self.layers[..self.depth as usize] {
            siblings.push(layer[index ^ 1]);
            index >>= 1;
        }
        tracing::trace!(position, depth = self.depth, "generated merkle proof");
        MerkleProof::new(siblings)
    }
}
