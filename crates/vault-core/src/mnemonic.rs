//! BIP-39 entropy and mnemonic codec.
//!
//! Entropy comes from the OS random source by default; every function is
//! also available with an injected RNG so an unavailable entropy source can
//! be exercised in tests.

use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::VaultError;

/// Entropy strength of a mnemonic, in bits.
///
/// Word count is `bits / 32 * 3`: 128 bits make the 12-word phrase the UI
/// exposes; the larger strengths are available to library callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strength {
    #[default]
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl Strength {
    pub fn bits(self) -> usize {
        match self {
            Strength::Bits128 => 128,
            Strength::Bits160 => 160,
            Strength::Bits192 => 192,
            Strength::Bits224 => 224,
            Strength::Bits256 => 256,
        }
    }

    pub fn byte_count(self) -> usize {
        self.bits() / 8
    }

    pub fn word_count(self) -> usize {
        self.bits() / 32 * 3
    }
}

/// Generate a fresh mnemonic phrase from the OS random source.
pub fn generate_mnemonic(strength: Strength) -> Result<String, VaultError> {
    generate_mnemonic_with(&mut OsRng, strength)
}

/// Generate a mnemonic phrase from the supplied RNG.
///
/// A failing RNG surfaces as `EntropySource`; the entropy buffer is zeroized
/// before returning either way.
pub fn generate_mnemonic_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    strength: Strength,
) -> Result<String, VaultError> {
    let mut entropy = [0u8; 32];
    let filled = &mut entropy[..strength.byte_count()];

    if rng.try_fill_bytes(filled).is_err() {
        entropy.zeroize();
        return Err(VaultError::EntropySource);
    }

    let result = entropy_to_mnemonic(filled);
    entropy.zeroize();
    result
}

/// Encode raw entropy bytes as a checksummed mnemonic phrase.
pub fn entropy_to_mnemonic(entropy: &[u8]) -> Result<String, VaultError> {
    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
        .map_err(|e| VaultError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Decode a mnemonic phrase back to its entropy bytes, verifying the
/// checksum.
pub fn mnemonic_to_entropy(phrase: &str) -> Result<Vec<u8>, VaultError> {
    Ok(parse_phrase(phrase)?.to_entropy())
}

/// Whether the phrase is a well-formed, checksum-valid mnemonic.
pub fn validate_mnemonic(phrase: &str) -> bool {
    parse_phrase(phrase).is_ok()
}

/// Whether a single word is in the BIP-39 wordlist (used by re-import UIs
/// for per-word feedback).
pub fn is_valid_word(word: &str) -> bool {
    Language::English.find_word(word).is_some()
}

/// The full 2048-entry wordlist.
pub fn word_list() -> &'static [&'static str] {
    Language::English.word_list()
}

pub(crate) fn parse_phrase(phrase: &str) -> Result<Mnemonic, VaultError> {
    Mnemonic::parse_in_normalized(Language::English, phrase).map_err(|e| match e {
        bip39::Error::UnknownWord(index) => VaultError::InvalidWord { index },
        bip39::Error::InvalidChecksum => VaultError::InvalidChecksum,
        other => VaultError::InvalidMnemonic(other.to_string()),
    })
}
