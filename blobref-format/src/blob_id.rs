//! # Blob Identifier
//!
//! A blob is addressed by the 256-bit digest of its code section. The
//! configurables section never takes part in the digest, so every deployment
//! of the same compiled program shares one `BlobId`.

use crate::encoding::{decode_hex_array, encode_hex};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content hash of a program's code section (32 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BlobId([u8; BlobId::SIZE]);

impl BlobId {
    /// Digest size in bytes
    pub const SIZE: usize = 32;

    /// Length of the hex form including the `0x` prefix
    pub const HEX_LEN: usize = 2 + 2 * Self::SIZE;

    pub const fn new(bytes: [u8; Self::SIZE]) -> Self {
        Self(bytes)
    }

    /// Build from a slice that must be exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        <[u8; Self::SIZE]>::try_from(bytes)
            .map(Self)
            .map_err(|_| FormatError::InvalidLength {
                expected: Self::SIZE,
                found: bytes.len(),
            })
    }

    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        decode_hex_array(s).map(Self)
    }

    /// Lowercase `0x`-prefixed hex form (66 characters)
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; Self::SIZE] {
        self.0
    }
}

impl From<[u8; BlobId::SIZE]> for BlobId {
    fn from(bytes: [u8; BlobId::SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for BlobId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlobId({})", self.to_hex())
    }
}

impl FromStr for BlobId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<BlobId> for String {
    fn from(id: BlobId) -> Self {
        id.to_hex()
    }
}

impl TryFrom<String> for BlobId {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_form() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xAB;
        bytes[31] = 0x01;
        let id = BlobId::new(bytes);

        let hex = id.to_hex();
        assert_eq!(hex.len(), BlobId::HEX_LEN);
        assert!(hex.starts_with("0xab"));
        assert!(hex.ends_with("01"));
        assert_eq!(id.to_string(), hex);
    }

    #[test]
    fn test_parse() {
        let hex = format!("0x{}", "ff".repeat(32));
        let id: BlobId = hex.parse().unwrap();
        assert_eq!(id.as_bytes(), &[0xFF; 32]);

        assert!(BlobId::from_hex("0xff").is_err());
    }

    #[test]
    fn test_from_slice_length() {
        assert!(BlobId::from_slice(&[0u8; 32]).is_ok());
        let err = BlobId::from_slice(&[0u8; 33]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidLength { expected: 32, found: 33 }));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = BlobId::new([0x11; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "11".repeat(32)));

        let back: BlobId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
