use thiserror::Error;

/// EVM chain operation errors.
#[derive(Debug, Error)]
pub enum EvmError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("abi decode error: {0}")]
    AbiDecode(String),

    #[error("amount exceeds the supported range")]
    AmountOverflow,
}
