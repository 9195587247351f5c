//! Base58 encoding of Ed25519 public keys.

use crate::error::SolError;

/// Encode a 32-byte Ed25519 public key as a Solana address.
///
/// The public key bytes ARE the address bytes; Base58 is purely a display
/// encoding here, unlike Bitcoin there is no version byte or checksum.
pub fn pubkey_to_address(pubkey: &[u8; 32]) -> String {
    bs58::encode(pubkey).into_string()
}

/// Decode a Solana address back to its 32-byte public key.
pub fn address_to_pubkey(address: &str) -> Result<[u8; 32], SolError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })
}

/// Validate a Solana address string.
///
/// Valid means: Base58 that decodes to exactly 32 bytes.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    address_to_pubkey(address).map(|_| true)
}
