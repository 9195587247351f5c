//! EVM chain support for the Shinrai vault.
//!
//! This crate provides:
//! - EIP-55 checksummed address derivation from secp256k1 public keys
//! - Network definitions for the Soneium mainnet
//! - Calldata codecs for the read-only ERC-20 surface
//!   (`balanceOf`/`decimals`/`symbol`) consumed by the balance layer
//!
//! It deliberately contains no transaction building, no signing, and no
//! network I/O. The balance-fetching layer lives outside this workspace and
//! only consumes the pure encoders here.

pub mod address;
pub mod erc20;
pub mod error;
pub mod network;

pub use address::{checksum_address, pubkey_to_address, validate_address};
pub use error::EvmError;
pub use network::{EvmNetwork, JPYC_TOKEN_CONTRACT, SONEIUM};
