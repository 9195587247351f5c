use thiserror::Error;

use crate::types::Chain;

/// Errors produced by the vault derivation pipeline.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The OS-level secure random source is unavailable. Fatal: no partial
    /// vault is ever produced.
    #[error("secure entropy source unavailable")]
    EntropySource,

    /// The phrase is structurally broken (word count, whitespace, language).
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// A word at the given position is not in the BIP-39 wordlist.
    #[error("mnemonic word at position {index} is not in the wordlist")]
    InvalidWord { index: usize },

    /// The phrase decodes but its embedded checksum does not match.
    #[error("mnemonic checksum mismatch")]
    InvalidChecksum,

    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    /// Child derivation produced a zero or out-of-range scalar. Recoverable
    /// by retrying with index+1; that policy belongs to the caller, never to
    /// the primitive.
    #[error("child derivation failed: {0}")]
    InvalidDerivation(String),

    /// A non-hardened index was requested on the ed25519 branch, which only
    /// supports hardened derivation.
    #[error("non-hardened index {index} is not supported on the ed25519 branch")]
    UnsupportedDerivation { index: u32 },

    /// A per-chain step failed during vault assembly. The whole generation
    /// fails; callers never see a partially populated chain map.
    #[error("derivation failed for chain {chain}")]
    ChainDerivation {
        chain: Chain,
        #[source]
        source: Box<VaultError>,
    },

    #[error("address encoding failed: {0}")]
    AddressEncoding(String),

    /// The session already owns a vault; use `replace` to start over.
    #[error("a vault already exists in this session")]
    VaultExists,
}

impl From<chain_evm::EvmError> for VaultError {
    fn from(e: chain_evm::EvmError) -> Self {
        VaultError::AddressEncoding(format!("evm: {e}"))
    }
}

impl From<chain_sol::SolError> for VaultError {
    fn from(e: chain_sol::SolError) -> Self {
        VaultError::AddressEncoding(format!("sol: {e}"))
    }
}
