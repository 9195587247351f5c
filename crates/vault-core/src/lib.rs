//! Deterministic multi-chain wallet derivation.
//!
//! One 64-byte BIP-39 seed fans out into two independent key trees: a
//! secp256k1 BIP-32 tree for EVM chains and a hardened-only SLIP-0010
//! ed25519 tree for Solana. The [`Vault`] facade runs the whole pipeline
//! (entropy, mnemonic, seed, per-chain keys, addresses) in one shot, and
//! [`WalletSession`] owns the resulting vault for the application.
//!
//! Secrets stay wrapped: seeds and private keys zeroize on drop and never
//! appear in `Debug` output or serialized forms.

pub mod error;
pub mod hd;
pub mod mnemonic;
pub mod path;
pub mod seed;
pub mod session;
pub mod types;
pub mod vault;

pub use error::VaultError;
pub use hd::{Ed25519ExtendedKey, Secp256k1ExtendedKey};
pub use mnemonic::{
    entropy_to_mnemonic, generate_mnemonic, generate_mnemonic_with, is_valid_word,
    mnemonic_to_entropy, validate_mnemonic, word_list, Strength,
};
pub use path::{evm_path, solana_path, DerivationPath, PathChild, HARDENED_FLAG};
pub use seed::{derive_seed, Seed, SEED_LEN};
pub use session::WalletSession;
pub use types::{Chain, ChainAddress, CurveKind, SecretKeyBytes, Vault};
pub use vault::{
    derive_chain_address, derive_chain_addresses, generate_vault, generate_vault_with,
    restore_vault,
};
