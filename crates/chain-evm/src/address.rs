//! EVM address derivation and EIP-55 checksum encoding.

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

use crate::error::EvmError;

/// Derive an EIP-55 checksummed address from a secp256k1 public key.
///
/// The address is the last 20 bytes of the Keccak-256 hash of the
/// uncompressed curve point, minus its `0x04` format byte. Well-formed keys
/// always produce an address, so there is no error path.
pub fn pubkey_to_address(pubkey: &VerifyingKey) -> String {
    let point = pubkey.to_encoded_point(false);
    // Skip the 0x04 prefix; hash the 64-byte x||y coordinates.
    let hash = Keccak256::digest(&point.as_bytes()[1..]);

    let lower = hex::encode(&hash[12..]);
    apply_checksum(&lower)
}

/// Apply the EIP-55 mixed-case checksum to a 0x-prefixed hex address.
///
/// The input may be in any case; it is lowercased before checksumming, so
/// the function is idempotent over its own output.
pub fn checksum_address(address: &str) -> Result<String, EvmError> {
    let hex_part = strip_hex_prefix(address)?;
    Ok(apply_checksum(&hex_part))
}

/// Validate an EVM address string.
///
/// Checks the `0x` + 40 hex character shape. All-lowercase and all-uppercase
/// forms carry no checksum and pass on shape alone; mixed-case forms must
/// match their EIP-55 encoding exactly. A well-shaped address with a wrong
/// checksum returns `Ok(false)`; a malformed string is an error.
pub fn validate_address(address: &str) -> Result<bool, EvmError> {
    let hex_part = strip_hex_prefix(address)?;

    let no_upper = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let no_lower = hex_part.chars().all(|c| !c.is_ascii_lowercase());
    if no_upper || no_lower {
        return Ok(true);
    }

    Ok(apply_checksum(&hex_part) == address)
}

/// Strip the 0x prefix and check the 40-hex-character shape.
fn strip_hex_prefix(address: &str) -> Result<String, EvmError> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EvmError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != 40 {
        return Err(EvmError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EvmError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    Ok(hex_part.to_lowercase())
}

/// EIP-55 core: uppercase every hex letter whose corresponding nibble in
/// Keccak-256(lowercase address) is >= 8.
fn apply_checksum(lower_hex: &str) -> String {
    let hash = Keccak256::digest(lower_hex.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower_hex.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
