use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing digits kept when encoding an identifier.
pub const MAX_ID_DIGITS: usize = 10;

/// On-ledger numeric form of a human-readable prescription ID.
///
/// Only the last ten digits survive encoding, so `"RX-0012345678901"` and
/// `"ORDER-2345678901"` map to the same value. Identifiers already issued
/// on-ledger depend on this exact mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedIdentifier(pub u64);

impl EncodedIdentifier {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EncodedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EncodedIdentifier {
    fn from(raw: &str) -> Self {
        encode_identifier(raw)
    }
}

/// Strip non-digits, keep the last ten, parse as base 10. Empty encodes to 0.
pub fn encode_identifier(raw: &str) -> EncodedIdentifier {
    let digits: Vec<u8> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .map(|c| c as u8 - b'0')
        .collect();

    let start = digits.len().saturating_sub(MAX_ID_DIGITS);

    // At most ten digits, so this never exceeds 9_999_999_999.
    let value = digits[start..]
        .iter()
        .fold(0u64, |acc, d| acc * 10 + u64::from(*d));

    EncodedIdentifier(value)
}
