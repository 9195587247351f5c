//! The vault derivation facade.
//!
//! This is the single integration point the application shell calls. It
//! composes entropy -> mnemonic -> seed -> per-chain HD derivation ->
//! address encoding into one atomic operation: either every registered
//! chain derives successfully or the whole call fails with the first error,
//! tagged with the chain it failed on. No partial vault is ever observable,
//! and nothing is cached between calls.

use std::collections::BTreeMap;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::VaultError;
use crate::hd::{Ed25519ExtendedKey, Secp256k1ExtendedKey};
use crate::mnemonic::{self, Strength};
use crate::seed::{derive_seed, Seed};
use crate::types::{Chain, ChainAddress, CurveKind, SecretKeyBytes, Vault};

/// Generate a brand-new vault from OS entropy.
pub fn generate_vault(strength: Strength) -> Result<Vault, VaultError> {
    generate_vault_with(&mut OsRng, strength)
}

/// Generate a vault from the supplied RNG. An RNG failure aborts before any
/// key material exists.
pub fn generate_vault_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    strength: Strength,
) -> Result<Vault, VaultError> {
    let phrase = mnemonic::generate_mnemonic_with(rng, strength)?;
    build_vault(&phrase, "")
}

/// Rebuild a vault from an externally supplied mnemonic phrase.
///
/// This is the only path where the mnemonic error taxonomy (unknown word,
/// checksum mismatch) is reachable; generated phrases are valid by
/// construction.
pub fn restore_vault(phrase: &str, passphrase: &str) -> Result<Vault, VaultError> {
    build_vault(phrase, passphrase)
}

fn build_vault(phrase: &str, passphrase: &str) -> Result<Vault, VaultError> {
    let seed = derive_seed(phrase, passphrase)?;
    let chains = derive_chain_addresses(&seed)?;
    let words = phrase.split_whitespace().map(str::to_owned).collect();
    Ok(Vault::new(words, seed, chains))
}

/// Derive an address for every registered chain.
///
/// Pure over the seed: identical seeds always produce identical maps.
/// All-or-nothing: the first failing chain aborts the whole derivation.
pub fn derive_chain_addresses(
    seed: &Seed,
) -> Result<BTreeMap<Chain, ChainAddress>, VaultError> {
    let mut chains = BTreeMap::new();
    for chain in Chain::ALL {
        let address = derive_chain_address(seed, chain).map_err(|source| {
            VaultError::ChainDerivation { chain, source: Box::new(source) }
        })?;
        chains.insert(chain, address);
    }
    Ok(chains)
}

/// Derive the leaf key and display address for one chain, dispatching on
/// the chain's curve.
pub fn derive_chain_address(seed: &Seed, chain: Chain) -> Result<ChainAddress, VaultError> {
    let path = chain.derivation_path();

    match chain.curve() {
        CurveKind::Secp256k1 => {
            let leaf = Secp256k1ExtendedKey::master(seed)?.derive_path(&path)?;
            let address = chain_evm::address::pubkey_to_address(&leaf.verifying_key());
            Ok(ChainAddress {
                chain,
                address,
                derivation_path: path.to_string(),
                private_key: Some(SecretKeyBytes::new(*leaf.private_key_bytes())),
            })
        }
        CurveKind::Ed25519 => {
            let leaf = Ed25519ExtendedKey::master(seed)?.derive_path(&path)?;
            let address = chain_sol::address::pubkey_to_address(&leaf.public_key());
            Ok(ChainAddress {
                chain,
                address,
                derivation_path: path.to_string(),
                private_key: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn restored_vault_matches_known_vectors() {
        let vault = restore_vault(TEST_MNEMONIC, "").unwrap();

        let evm = vault.chain_address(Chain::Soneium).unwrap();
        assert_eq!(evm.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
        assert_eq!(evm.derivation_path, "m/44'/60'/0'/0/0");
        assert_eq!(
            evm.private_key.as_ref().unwrap().reveal_hex(),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );

        let sol = vault.chain_address(Chain::Solana).unwrap();
        assert_eq!(sol.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert_eq!(sol.derivation_path, "m/44'/501'/0'/0'");
        assert!(sol.private_key.is_none());
    }

    #[test]
    fn generated_vault_covers_every_chain() {
        let vault = generate_vault(Strength::Bits128).unwrap();
        assert_eq!(vault.chains().len(), Chain::ALL.len());
        assert_eq!(vault.mnemonic_words().len(), 12);
    }

    #[test]
    fn generated_vault_is_internally_consistent() {
        // Re-deriving from the vault's own mnemonic reproduces the vault.
        let vault = generate_vault(Strength::Bits128).unwrap();
        let again = restore_vault(&vault.mnemonic_phrase(), "").unwrap();
        assert_eq!(vault.seed().as_bytes(), again.seed().as_bytes());
        for chain in Chain::ALL {
            assert_eq!(
                vault.chain_address(chain).unwrap().address,
                again.chain_address(chain).unwrap().address
            );
        }
    }

    #[test]
    fn chain_addresses_are_pure_over_the_seed() {
        let seed_a = derive_seed(TEST_MNEMONIC, "").unwrap();
        let seed_b = derive_seed(TEST_MNEMONIC, "").unwrap();
        let a = derive_chain_addresses(&seed_a).unwrap();
        let b = derive_chain_addresses(&seed_b).unwrap();
        for chain in Chain::ALL {
            assert_eq!(a[&chain].address, b[&chain].address);
        }
    }

    #[test]
    fn passphrase_changes_every_address() {
        let plain = restore_vault(TEST_MNEMONIC, "").unwrap();
        let salted = restore_vault(TEST_MNEMONIC, "TREZOR").unwrap();
        for chain in Chain::ALL {
            assert_ne!(
                plain.chain_address(chain).unwrap().address,
                salted.chain_address(chain).unwrap().address
            );
        }
    }

    #[test]
    fn restore_rejects_a_bad_mnemonic() {
        assert!(restore_vault("definitely not a mnemonic", "").is_err());
    }

    #[test]
    fn evm_address_checksum_is_valid() {
        let vault = generate_vault(Strength::Bits128).unwrap();
        let evm = vault.chain_address(Chain::Soneium).unwrap();
        assert!(chain_evm::address::validate_address(&evm.address).unwrap());
    }

    #[test]
    fn solana_address_is_valid_base58() {
        let vault = generate_vault(Strength::Bits128).unwrap();
        let sol = vault.chain_address(Chain::Solana).unwrap();
        assert!(chain_sol::address::validate_address(&sol.address).unwrap());
    }
}
