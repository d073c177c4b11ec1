//! Sorted-pair binary Merkle tree using Keccak-256.
//!
//! Items are right-padded with zeros to 32 bytes and hashed into leaves. The
//! leaves are sorted, evened out and padded to a power of two by duplicating
//! the last pair, then combined bottom-up with
//!
//! `parent = keccak256(min(a, b) || max(a, b))`
//!
//! Because every pair is sorted before hashing, a verifier only needs the leaf
//! and the ordered list of sibling hashes to recompute the root. This is the
//! same convention used by Solidity `MerkleProof`-style verifiers.
//!
//! # Core types
//!
//! - [`SortedMerkleTree`]: the fully materialized tree (root, items, proofs).
//! - [`MerkleProof`]: ordered sibling hashes from leaf to root.
//! - [`verify_merkle_branch`]: stateless verification against a root.

#![warn(missing_docs)]

mod error;
mod hash;
/// Power-of-two arithmetic used to shape the leaf layer.
pub mod helper;
mod leaf;
mod proof;
mod tree;


pub use error::{Result, SortedMerkleError};
pub use hash::{LEAF_SIZE, keccak256, sort_and_hash, sort_pair};
pub use helper::{is_power_of_two, next_power_of_two};
pub use leaf::{leaf_hash, pad_to, prepare_leaves};
pub use proof::{MerkleProof, verify_merkle_branch};
pub use tree::SortedMerkleTree;
