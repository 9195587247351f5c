//! Calldata and return-value codecs for the read-only ERC-20 surface.
//!
//! The balance layer queries token contracts through exactly three view
//! functions: `balanceOf(address)`, `decimals()` and `symbol()`. This module
//! encodes their calldata and decodes their return values without a full ABI
//! parser, and formats raw balances as `rawBalance / 10^decimals`.

use crate::error::EvmError;

/// Function selector for `balanceOf(address)`: `0x70a08231`.
const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

/// Function selector for `decimals()`: `0x313ce567`.
const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];

/// Function selector for `symbol()`: `0x95d89b41`.
const SYMBOL_SELECTOR: [u8; 4] = [0x95, 0xd8, 0x9b, 0x41];

/// Parse a 0x-prefixed hex address into its 20 raw bytes.
fn parse_address(address: &str) -> Result<[u8; 20], EvmError> {
    let hex_str = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EvmError::InvalidAddress("address must start with 0x".into()))?;

    if hex_str.len() != 40 {
        return Err(EvmError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_str.len()
        )));
    }

    let bytes = hex::decode(hex_str)
        .map_err(|e| EvmError::InvalidAddress(format!("invalid hex: {e}")))?;

    let mut addr = [0u8; 20];
    addr.copy_from_slice(&bytes);
    Ok(addr)
}

/// Encode a `balanceOf(address)` call.
///
/// Returns the complete calldata: selector plus the owner address left-padded
/// to a 32-byte word (36 bytes total).
pub fn encode_balance_of(owner: &str) -> Result<Vec<u8>, EvmError> {
    let addr = parse_address(owner)?;

    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&BALANCE_OF_SELECTOR);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(&addr);
    Ok(data)
}

/// Encode a `decimals()` call. No arguments, so the calldata is the bare
/// 4-byte selector.
pub fn encode_decimals() -> Vec<u8> {
    DECIMALS_SELECTOR.to_vec()
}

/// Encode a `symbol()` call.
pub fn encode_symbol() -> Vec<u8> {
    SYMBOL_SELECTOR.to_vec()
}

/// Decode a single uint256 return value (the shape of `balanceOf` and
/// `decimals` results) into a big-endian 32-byte array.
pub fn decode_uint256(data: &[u8]) -> Result<[u8; 32], EvmError> {
    if data.len() < 32 {
        return Err(EvmError::AbiDecode(format!(
            "expected at least 32 bytes for uint256, got {}",
            data.len()
        )));
    }

    let mut word = [0u8; 32];
    word.copy_from_slice(&data[..32]);
    Ok(word)
}

/// Decode an ABI-encoded `string` return value (the shape of `symbol`).
///
/// Layout: a 32-byte offset word, then at that offset a 32-byte length word
/// followed by the UTF-8 bytes right-padded to a 32-byte boundary.
pub fn decode_string(data: &[u8]) -> Result<String, EvmError> {
    let offset = decode_usize_word(data, 0)?;
    let len = decode_usize_word(data, offset)?;

    let start = offset + 32;
    let end = start
        .checked_add(len)
        .ok_or_else(|| EvmError::AbiDecode("string length overflow".into()))?;
    if data.len() < end {
        return Err(EvmError::AbiDecode(format!(
            "string body truncated: need {} bytes, have {}",
            end,
            data.len()
        )));
    }

    String::from_utf8(data[start..end].to_vec())
        .map_err(|e| EvmError::AbiDecode(format!("string is not valid UTF-8: {e}")))
}

/// Read one 32-byte big-endian word at `offset` as a usize, rejecting values
/// that cannot index the buffer.
fn decode_usize_word(data: &[u8], offset: usize) -> Result<usize, EvmError> {
    let end = offset
        .checked_add(32)
        .ok_or_else(|| EvmError::AbiDecode("word offset overflow".into()))?;
    let word = data
        .get(offset..end)
        .ok_or_else(|| EvmError::AbiDecode(format!("word at offset {offset} out of bounds")))?;

    if word[..24].iter().any(|&b| b != 0) {
        return Err(EvmError::AbiDecode("word value exceeds usize range".into()));
    }

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(tail))
        .map_err(|_| EvmError::AbiDecode("word value exceeds usize range".into()))
}

/// Format a raw uint256 token amount as a decimal string, dividing by
/// `10^decimals` without losing precision.
///
/// Mirrors the display convention of the balance UI: at least one fractional
/// digit, trailing zeros trimmed (`1_000_000` at 6 decimals -> `"1.0"`).
/// Values above `u128::MAX` are rejected rather than rounded.
pub fn format_units(raw: &[u8; 32], decimals: u8) -> Result<String, EvmError> {
    if raw[..16].iter().any(|&b| b != 0) {
        return Err(EvmError::AmountOverflow);
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&raw[16..]);
    let value = u128::from_be_bytes(low);

    let (whole, frac) = match 10u128.checked_pow(decimals as u32) {
        Some(scale) => (value / scale, value % scale),
        // 10^decimals exceeds u128, so the whole part is always zero.
        None => (0, value),
    };

    let mut frac_str = format!("{frac:0width$}", width = decimals as usize);
    while frac_str.len() > 1 && frac_str.ends_with('0') {
        frac_str.pop();
    }
    if frac_str.is_empty() {
        frac_str.push('0');
    }

    Ok(format!("{whole}.{frac_str}"))
}
