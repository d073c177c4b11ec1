use thiserror::Error;

/// Alias for `core::result::Result<T, SortedMerkleError>`.
pub type Result<T> = core::result::Result<T, SortedMerkleError>;

/// Errors from building a tree or generating proofs.
///
/// Verification never produces an error; a proof that does not match simply
/// verifies to `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortedMerkleError {
    /// The tree was built from zero items.
    #[error("no items provided to generate merkle tree")]
    EmptyInput,
    /// A proof was requested for a leaf that is not in the leaf layer.
    #[error("leaf {} not found in merkle tree", hex::encode(.0))]
    LeafNotFound(Vec<u8>),
    /// A proof was requested for a leaf index beyond the leaf layer.
    #[error("could not find index {index}, leaf count is {leaf_count}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of leaves in the normalized leaf layer.
        leaf_count: usize,
    },
}
