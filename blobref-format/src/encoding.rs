//! # Hex Encoding
//!
//! Every hash, identifier and signature crosses the crate boundary as a
//! lowercase hex string with a `0x` prefix. Decoding also accepts upper case
//! digits and a missing prefix.

use crate::error::{FormatError, Result};

/// Hex prefix used for all external values
pub const HEX_PREFIX: &str = "0x";

/// Encode bytes as a lowercase `0x`-prefixed hex string
///
/// The empty slice encodes to `"0x"`.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    out.push_str(HEX_PREFIX);
    out.push_str(&hex::encode(bytes));
    out
}

/// Decode a hex string, with or without the `0x` prefix
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let digits = strip_prefix(s);
    hex::decode(digits).map_err(|e| FormatError::InvalidHex(format!("{s:?}: {e}")))
}

/// Decode a hex string into exactly `N` bytes
pub fn decode_hex_array<const N: usize>(s: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(s)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| FormatError::InvalidLength {
        expected: N,
        found: bytes.len(),
    })
}

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX)
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
