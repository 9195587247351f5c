//! Hierarchical deterministic key trees.
//!
//! Two curve branches with the same external shape (master key from seed,
//! child derivation, full-path derivation) but deliberately distinct key
//! types: a [`secp256k1::Secp256k1ExtendedKey`] cannot be fed into the
//! ed25519 branch or vice versa, so cross-curve mixups are compile errors
//! rather than silently wrong keys.

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519ExtendedKey;
pub use secp256k1::Secp256k1ExtendedKey;
