//! Solana address support for the Shinrai vault.
//!
//! A Solana address is nothing more than the Base58 encoding of a raw
//! 32-byte Ed25519 public key: no hashing step and no checksum byte.
//! This crate only deals in that encoding; key derivation lives in
//! `vault-core` and network access lives outside the workspace entirely.

pub mod address;
pub mod error;

pub use address::{address_to_pubkey, pubkey_to_address, validate_address};
pub use error::SolError;
