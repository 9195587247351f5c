//! SLIP-0010 key tree over ed25519, for Solana-style chains.
//!
//! Unlike the secp256k1 branch, ed25519 SLIP-0010 derivation has no
//! non-hardened form: every child must be hardened, and a non-hardened
//! request is an error rather than a silently-forced hardened bit.

use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

use crate::error::VaultError;
use crate::path::{DerivationPath, HARDENED_FLAG};
use crate::seed::Seed;

type HmacSha512 = Hmac<Sha512>;

/// HMAC key for the master node, per SLIP-0010.
const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// A node in the ed25519 HD tree.
pub struct Ed25519ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
    depth: u8,
    parent_fingerprint: [u8; 4],
}

impl Ed25519ExtendedKey {
    /// Derive the tree root: HMAC-SHA512 keyed `"ed25519 seed"` over the
    /// master seed, split into key and chain code.
    pub fn master(seed: &Seed) -> Result<Self, VaultError> {
        let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY)
            .map_err(|e| VaultError::InvalidDerivation(e.to_string()))?;
        mac.update(seed.as_bytes());
        let digest = mac.finalize().into_bytes();

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);

        Ok(Self {
            key,
            chain_code,
            depth: 0,
            parent_fingerprint: [0u8; 4],
        })
    }

    /// Derive one hardened child:
    /// HMAC-SHA512(chain code, `0x00 || parent key || (index | 0x80000000)`).
    ///
    /// `hardened == false` is rejected with `UnsupportedDerivation` for
    /// every index value.
    pub fn derive_child(&self, index: u32, hardened: bool) -> Result<Self, VaultError> {
        if !hardened {
            return Err(VaultError::UnsupportedDerivation { index });
        }
        if index >= HARDENED_FLAG {
            return Err(VaultError::InvalidPath(format!(
                "index {index} exceeds the hardened boundary"
            )));
        }

        let mut mac = HmacSha512::new_from_slice(&self.chain_code)
            .map_err(|e| VaultError::InvalidDerivation(e.to_string()))?;
        mac.update(&[0x00]);
        mac.update(&self.key);
        mac.update(&(index | HARDENED_FLAG).to_be_bytes());
        let digest = mac.finalize().into_bytes();

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);

        Ok(Self {
            key,
            chain_code,
            depth: self.depth.saturating_add(1),
            parent_fingerprint: self.fingerprint(),
        })
    }

    /// Walk a full path from this node. Every segment must be hardened.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, VaultError> {
        let mut node = Self {
            key: self.key,
            chain_code: self.chain_code,
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
        };
        for child in path.children() {
            node = node.derive_child(child.index, child.hardened)?;
        }
        Ok(node)
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    pub fn chain_code(&self) -> [u8; 32] {
        self.chain_code
    }

    /// Raw private scalar bytes.
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.key
    }

    /// The 32-byte ed25519 public key for this node.
    pub fn public_key(&self) -> [u8; 32] {
        ed25519_dalek::SigningKey::from_bytes(&self.key)
            .verifying_key()
            .to_bytes()
    }

    /// SLIP-0010 fingerprint of this node: first four bytes of
    /// RIPEMD160(SHA256(`0x00 || public key`)).
    fn fingerprint(&self) -> [u8; 4] {
        let mut serialized = [0u8; 33];
        serialized[1..].copy_from_slice(&self.public_key());
        let sha = Sha256::digest(serialized);
        let ripe = Ripemd160::digest(sha);

        let mut out = [0u8; 4];
        out.copy_from_slice(&ripe[..4]);
        out
    }
}

impl core::fmt::Debug for Ed25519ExtendedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Ed25519ExtendedKey(redacted)")
    }
}

impl Drop for Ed25519ExtendedKey {
    fn drop(&mut self) {
        self.key.zeroize();
        self.chain_code.zeroize();
    }
}
