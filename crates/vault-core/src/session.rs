//! Single-vault session ownership.
//!
//! The application owns exactly one vault at a time behind explicit
//! create/replace operations. This is a plain value type, no global
//! singleton and no interior mutability. Dropping or replacing the vault
//! zeroizes its seed and key material.

use crate::error::VaultError;
use crate::mnemonic::Strength;
use crate::types::Vault;
use crate::vault::{generate_vault, restore_vault};

/// Owns at most one [`Vault`].
#[derive(Debug, Default)]
pub struct WalletSession {
    vault: Option<Vault>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate and adopt a new vault. Fails with `VaultExists` if the
    /// session already owns one; use [`WalletSession::replace`] to start
    /// over deliberately.
    pub fn create(&mut self, strength: Strength) -> Result<&Vault, VaultError> {
        if self.vault.is_some() {
            return Err(VaultError::VaultExists);
        }
        Ok(self.vault.insert(generate_vault(strength)?))
    }

    /// Restore a vault from an external mnemonic. Same occupancy rule as
    /// [`WalletSession::create`].
    pub fn restore(&mut self, phrase: &str, passphrase: &str) -> Result<&Vault, VaultError> {
        if self.vault.is_some() {
            return Err(VaultError::VaultExists);
        }
        Ok(self.vault.insert(restore_vault(phrase, passphrase)?))
    }

    /// Drop the current vault (if any) and generate a fresh one. The old
    /// vault only leaves memory once the new one derived successfully, so a
    /// failed replace keeps the session usable.
    pub fn replace(&mut self, strength: Strength) -> Result<&Vault, VaultError> {
        let fresh = generate_vault(strength)?;
        Ok(self.vault.insert(fresh))
    }

    pub fn vault(&self) -> Option<&Vault> {
        self.vault.as_ref()
    }

    /// Drop the vault, zeroizing its seed and keys.
    pub fn clear(&mut self) {
        self.vault = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn starts_empty() {
        let session = WalletSession::new();
        assert!(session.vault().is_none());
    }

    #[test]
    fn create_adopts_a_vault() {
        let mut session = WalletSession::new();
        session.create(Strength::Bits128).unwrap();
        assert!(session.vault().is_some());
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let mut session = WalletSession::new();
        session.create(Strength::Bits128).unwrap();
        assert!(matches!(
            session.create(Strength::Bits128),
            Err(VaultError::VaultExists)
        ));
    }

    #[test]
    fn restore_refuses_to_overwrite() {
        let mut session = WalletSession::new();
        session.create(Strength::Bits128).unwrap();
        assert!(matches!(
            session.restore(TEST_MNEMONIC, ""),
            Err(VaultError::VaultExists)
        ));
    }

    #[test]
    fn replace_swaps_the_vault() {
        let mut session = WalletSession::new();
        let first = session.create(Strength::Bits128).unwrap().mnemonic_phrase();
        let second = session.replace(Strength::Bits128).unwrap().mnemonic_phrase();
        assert_ne!(first, second);
    }

    #[test]
    fn restore_into_empty_session() {
        let mut session = WalletSession::new();
        let vault = session.restore(TEST_MNEMONIC, "").unwrap();
        assert_eq!(vault.mnemonic_phrase(), TEST_MNEMONIC);
    }

    #[test]
    fn restore_failure_leaves_the_session_empty() {
        let mut session = WalletSession::new();
        assert!(session.restore("bogus phrase", "").is_err());
        assert!(session.vault().is_none());
    }

    #[test]
    fn clear_empties_the_session() {
        let mut session = WalletSession::new();
        session.create(Strength::Bits128).unwrap();
        session.clear();
        assert!(session.vault().is_none());
    }
}
