use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit { digit: char, position: usize },

    #[error("Hex string has odd length {0}")]
    OddLength(usize),
}

/// Decode a hex string (optionally `0x`-prefixed) into bytes.
///
/// Input is consumed two characters at a time. When the length is odd the
/// trailing character is decoded on its own as a one-digit value, so `"abc"`
/// yields `[0xab, 0x0c]`. Hashes already committed on-ledger were produced with
/// this behaviour, so it is kept. Use [`hex_to_bytes_strict`] to reject such input.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, CodecError> {
    let clean = strip_prefix(hex);

    if clean.len() % 2 != 0 {
        warn!(
            "Decoding odd-length hex string ({} chars); last byte holds a single digit",
            clean.len()
        );
    }

    let offset = hex.len() - clean.len();
    let mut bytes = Vec::with_capacity(clean.len().div_ceil(2));

    for (index, pair) in clean.as_bytes().chunks(2).enumerate() {
        let position = offset + index * 2;
        let byte = match *pair {
            [hi, lo] => (nibble(hi, position)? << 4) | nibble(lo, position + 1)?,
            [single] => nibble(single, position)?,
            _ => continue,
        };
        bytes.push(byte);
    }

    Ok(bytes)
}

/// Like [`hex_to_bytes`] but fails on odd-length input.
pub fn hex_to_bytes_strict(hex: &str) -> Result<Vec<u8>, CodecError> {
    let clean = strip_prefix(hex);
    if clean.len() % 2 != 0 {
        return Err(CodecError::OddLength(clean.len()));
    }
    hex_to_bytes(hex)
}

/// Lowercase hex, no prefix.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Lowercase hex with a `0x` prefix, the form the Aptos node expects for `vector<u8>`.
pub fn bytes_to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn strip_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x").unwrap_or(hex)
}

fn nibble(c: u8, position: usize) -> Result<u8, CodecError> {
    (c as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(CodecError::InvalidHexDigit {
            digit: c as char,
            position,
        })
}
