use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::path::{evm_path, solana_path, DerivationPath};
use crate::seed::Seed;

/// Chains the vault derives addresses for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Chain {
    Soneium,
    Solana,
}

impl Chain {
    /// Every registered chain, in the order the facade derives them.
    pub const ALL: [Chain; 2] = [Chain::Soneium, Chain::Solana];

    /// BIP-44 coin type. Soneium shares the EVM family's coin type 60.
    pub fn coin_type(&self) -> u32 {
        match self {
            Chain::Soneium => 60,
            Chain::Solana => 501,
        }
    }

    pub fn curve(&self) -> CurveKind {
        match self {
            Chain::Soneium => CurveKind::Secp256k1,
            Chain::Solana => CurveKind::Ed25519,
        }
    }

    /// The fixed leaf path for this chain.
    pub fn derivation_path(&self) -> DerivationPath {
        match self {
            Chain::Soneium => evm_path(),
            Chain::Solana => solana_path(),
        }
    }

    /// Stable lowercase identifier, used as the key in serialized chain maps.
    pub fn id(&self) -> &'static str {
        match self {
            Chain::Soneium => "soneium",
            Chain::Solana => "solana",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Soneium => "Soneium",
            Chain::Solana => "Solana",
        }
    }

    /// Native token symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Chain::Soneium => "ETH",
            Chain::Solana => "SOL",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which elliptic curve a chain derives its keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Secp256k1,
    Ed25519,
}

/// Raw 32-byte private key material, zeroed on drop and redacted in Debug.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKeyBytes([u8; 32]);

impl SecretKeyBytes {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex form for export flows; deliberately loud, mirrors
    /// [`Seed::reveal_hex`].
    pub fn reveal_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKeyBytes(redacted)")
    }
}

/// A derived, display-ready address for one chain.
///
/// EVM leaves carry their raw private key (the UI offers key export for the
/// EVM chain); Solana entries hold the address only.
#[derive(Debug, Clone, Serialize)]
pub struct ChainAddress {
    pub chain: Chain,
    pub address: String,
    pub derivation_path: String,
    #[serde(skip)]
    pub private_key: Option<SecretKeyBytes>,
}

/// The aggregate result of one vault generation: mnemonic, master seed, and
/// one address per registered chain.
///
/// Immutable after creation: there is no re-derivation against an existing
/// vault, start a new one instead.
pub struct Vault {
    mnemonic: Vec<String>,
    seed: Seed,
    chains: BTreeMap<Chain, ChainAddress>,
}

impl Vault {
    pub(crate) fn new(
        mnemonic: Vec<String>,
        seed: Seed,
        chains: BTreeMap<Chain, ChainAddress>,
    ) -> Self {
        Self { mnemonic, seed, chains }
    }

    /// The recovery words, in order.
    pub fn mnemonic_words(&self) -> &[String] {
        &self.mnemonic
    }

    /// The words joined into the canonical space-separated phrase.
    pub fn mnemonic_phrase(&self) -> String {
        self.mnemonic.join(" ")
    }

    /// The master seed. Sensitive: callers must never render it.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn chains(&self) -> &BTreeMap<Chain, ChainAddress> {
        &self.chains
    }

    pub fn chain_address(&self, chain: Chain) -> Option<&ChainAddress> {
        self.chains.get(&chain)
    }
}

impl Drop for Vault {
    fn drop(&mut self) {
        for word in &mut self.mnemonic {
            word.zeroize();
        }
    }
}

impl fmt::Debug for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vault")
            .field("mnemonic", &format_args!("[{} words, redacted]", self.mnemonic.len()))
            .field("seed", &self.seed)
            .field("chains", &self.chains)
            .finish()
    }
}
