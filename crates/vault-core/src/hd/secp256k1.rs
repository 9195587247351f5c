//! BIP-32 key tree over secp256k1, for EVM-style chains.

use bip32::{ChildNumber, XPrv};
use k256::ecdsa::VerifyingKey;
use zeroize::Zeroizing;

use crate::error::VaultError;
use crate::path::DerivationPath;
use crate::seed::Seed;

/// A node in the secp256k1 HD tree: private key, chain code, depth and
/// parent fingerprint.
pub struct Secp256k1ExtendedKey {
    inner: XPrv,
}

impl Secp256k1ExtendedKey {
    /// Derive the tree root from a master seed (HMAC-SHA512 split keyed
    /// `"Bitcoin seed"`, per BIP-32).
    pub fn master(seed: &Seed) -> Result<Self, VaultError> {
        let inner = XPrv::new(seed.as_bytes())
            .map_err(|e| VaultError::InvalidDerivation(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Derive one child. Hardened children commit to the parent private key,
    /// non-hardened to the parent public key.
    ///
    /// In the vanishingly rare case the child scalar is zero or exceeds the
    /// curve order this returns `InvalidDerivation`; the caller decides
    /// whether to retry with index+1, the primitive never loops.
    pub fn derive_child(&self, index: u32, hardened: bool) -> Result<Self, VaultError> {
        let child = ChildNumber::new(index, hardened)
            .map_err(|e| VaultError::InvalidPath(e.to_string()))?;
        let inner = self
            .inner
            .derive_child(child)
            .map_err(|e| VaultError::InvalidDerivation(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Walk a full path from this node, one `derive_child` per segment.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, VaultError> {
        let mut node = Self { inner: self.inner.clone() };
        for child in path.children() {
            node = node.derive_child(child.index, child.hardened)?;
        }
        Ok(node)
    }

    pub fn depth(&self) -> u8 {
        self.inner.attrs().depth
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.inner.attrs().parent_fingerprint
    }

    pub fn chain_code(&self) -> [u8; 32] {
        self.inner.attrs().chain_code
    }

    /// Raw private scalar bytes, zeroed when the wrapper drops.
    pub fn private_key_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.inner.to_bytes())
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        *self.inner.private_key().verifying_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::evm_path;
    use crate::seed::derive_seed;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Seed {
        derive_seed(TEST_MNEMONIC, "").unwrap()
    }

    #[test]
    fn master_key_shape() {
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        assert_eq!(root.depth(), 0);
        assert_eq!(root.parent_fingerprint(), [0u8; 4]);
        assert_eq!(root.chain_code().len(), 32);
    }

    #[test]
    fn master_fingerprint_known_vector() {
        // The child records its parent's fingerprint, so derive one level to
        // observe the master's.
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        let child = root.derive_child(44, true).unwrap();
        assert_eq!(hex::encode(child.parent_fingerprint()), "73c5da0a");
    }

    #[test]
    fn evm_leaf_private_key_known_vector() {
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        let leaf = root.derive_path(&evm_path()).unwrap();
        assert_eq!(
            hex::encode(*leaf.private_key_bytes()),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
        assert_eq!(leaf.depth(), 5);
    }

    #[test]
    fn derivation_is_deterministic() {
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        let a = root.derive_path(&evm_path()).unwrap();
        let b = root.derive_path(&evm_path()).unwrap();
        assert_eq!(*a.private_key_bytes(), *b.private_key_bytes());
    }

    #[test]
    fn hardened_and_normal_children_differ() {
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        let hardened = root.derive_child(0, true).unwrap();
        let normal = root.derive_child(0, false).unwrap();
        assert_ne!(*hardened.private_key_bytes(), *normal.private_key_bytes());
    }

    #[test]
    fn sibling_indexes_differ() {
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        let a = root.derive_child(0, false).unwrap();
        let b = root.derive_child(1, false).unwrap();
        assert_ne!(*a.private_key_bytes(), *b.private_key_bytes());
    }

    #[test]
    fn depth_increments_per_level() {
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        let child = root.derive_child(44, true).unwrap();
        let grandchild = child.derive_child(60, true).unwrap();
        assert_eq!(child.depth(), 1);
        assert_eq!(grandchild.depth(), 2);
    }

    #[test]
    fn empty_path_returns_the_root() {
        let root = Secp256k1ExtendedKey::master(&test_seed()).unwrap();
        let same = root.derive_path(&DerivationPath::default()).unwrap();
        assert_eq!(*root.private_key_bytes(), *same.private_key_bytes());
    }
}
