//! Master seed derivation (BIP-39 PBKDF2 stretch).

use std::fmt;

use zeroize::Zeroize;

use crate::error::VaultError;
use crate::mnemonic::parse_phrase;

/// Length of a master seed in bytes.
pub const SEED_LEN: usize = 64;

/// The 512-bit master seed every key in the vault derives from.
///
/// Zeroed on drop, redacted in Debug, never serialized. The hex form is only
/// reachable through [`Seed::reveal_hex`] so call sites that expose it are
/// easy to audit.
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }

    /// Hex-encode the seed. This is the one deliberate leak point; callers
    /// own the returned string's lifetime.
    pub fn reveal_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(64 bytes, redacted)")
    }
}

/// Stretch a mnemonic phrase (plus optional passphrase) into the 64-byte
/// master seed.
///
/// PBKDF2-HMAC-SHA512 with 2048 rounds, salt `"mnemonic" + passphrase`, per
/// BIP-39. Deterministic: identical inputs always yield a byte-identical
/// seed.
pub fn derive_seed(phrase: &str, passphrase: &str) -> Result<Seed, VaultError> {
    let mnemonic = parse_phrase(phrase)?;
    Ok(Seed::from_bytes(mnemonic.to_seed(passphrase)))
}
