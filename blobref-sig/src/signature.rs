//! # Signature Encodings
//!
//! ```text
//! Recoverable (65 bytes):  r[32] ‖ s[32] ‖ v[1]
//! Compact     (64 bytes):  r[32] ‖ s'[32]      s' = s with bit 255 = parity
//! ```
//!
//! A canonical secp256k1 `s` is below the curve order, which is smaller than
//! 2^255, so its top bit is free to carry the recovery parity.

use crate::error::{Result, SignatureError};
use blobref_format::{decode_hex, decode_hex_array, encode_hex, FormatError};
use std::fmt;

/// Size of the `r` and `s` scalars
pub const SCALAR_LEN: usize = 32;

/// Size of a recoverable signature
pub const RECOVERABLE_LEN: usize = 2 * SCALAR_LEN + 1;

/// Size of a compact signature
pub const COMPACT_LEN: usize = 2 * SCALAR_LEN;

/// Mask of the parity bit in the first byte of `s'`
pub const PARITY_MASK: u8 = 0x80;

/// Offset added to the parity by the `{27, 28}` convention
pub const LEGACY_V_OFFSET: u8 = 27;

/// 65-byte recoverable ECDSA signature, as produced by personal sign
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecoverableSignature {
    pub r: [u8; SCALAR_LEN],
    pub s: [u8; SCALAR_LEN],
    /// Recovery indicator, `{27, 28}` or `{0, 1}` depending on the producer
    pub v: u8,
}

impl RecoverableSignature {
    /// Split 65 raw bytes into `r`, `s` and `v`
    ///
    /// # Errors
    /// - [`SignatureError::MalformedSignature`] unless `bytes` is exactly 65 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RECOVERABLE_LEN {
            return Err(SignatureError::MalformedSignature { found: bytes.len() });
        }

        let mut r = [0u8; SCALAR_LEN];
        let mut s = [0u8; SCALAR_LEN];
        r.copy_from_slice(&bytes[..SCALAR_LEN]);
        s.copy_from_slice(&bytes[SCALAR_LEN..COMPACT_LEN]);

        Ok(Self {
            r,
            s,
            v: bytes[COMPACT_LEN],
        })
    }

    /// Parse `0x` + 130 hex digits
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&decode_hex(s)?)
    }

    pub fn to_bytes(&self) -> [u8; RECOVERABLE_LEN] {
        let mut bytes = [0u8; RECOVERABLE_LEN];
        bytes[..SCALAR_LEN].copy_from_slice(&self.r);
        bytes[SCALAR_LEN..COMPACT_LEN].copy_from_slice(&self.s);
        bytes[COMPACT_LEN] = self.v;
        bytes
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.to_bytes())
    }
}

impl TryFrom<&[u8]> for RecoverableSignature {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoverableSignature")
            .field("r", &encode_hex(&self.r))
            .field("s", &encode_hex(&self.s))
            .field("v", &self.v)
            .finish()
    }
}

/// 64-byte compact signature with the parity folded into `s`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactSignature([u8; COMPACT_LEN]);

impl CompactSignature {
    /// Fold `parity` into the top bit of `s`
    ///
    /// Only the lowest bit of `parity` is used.
    pub fn from_parts(r: &[u8; SCALAR_LEN], s: &[u8; SCALAR_LEN], parity: u8) -> Self {
        let mut bytes = [0u8; COMPACT_LEN];
        bytes[..SCALAR_LEN].copy_from_slice(r);
        bytes[SCALAR_LEN..].copy_from_slice(s);

        let top = &mut bytes[SCALAR_LEN];
        *top = (*top & !PARITY_MASK) | ((parity & 1) << 7);

        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        <[u8; COMPACT_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                FormatError::InvalidLength {
                    expected: COMPACT_LEN,
                    found: bytes.len(),
                }
                .into()
            })
    }

    /// Parse `0x` + 128 hex digits
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self(decode_hex_array(s)?))
    }

    pub fn r(&self) -> [u8; SCALAR_LEN] {
        let mut r = [0u8; SCALAR_LEN];
        r.copy_from_slice(&self.0[..SCALAR_LEN]);
        r
    }

    /// `s` with the parity bit cleared
    pub fn s(&self) -> [u8; SCALAR_LEN] {
        let mut s = [0u8; SCALAR_LEN];
        s.copy_from_slice(&self.0[SCALAR_LEN..]);
        s[0] &= !PARITY_MASK;
        s
    }

    /// Recovery parity carried in the top bit of `s'`
    pub fn parity(&self) -> u8 {
        self.0[SCALAR_LEN] >> 7
    }

    /// Expand back to 65 bytes using the `{27, 28}` convention
    pub fn to_recoverable(&self) -> RecoverableSignature {
        RecoverableSignature {
            r: self.r(),
            s: self.s(),
            v: LEGACY_V_OFFSET + self.parity(),
        }
    }

    pub fn as_bytes(&self) -> &[u8; COMPACT_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl AsRef<[u8]> for CompactSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for CompactSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactSignature({})", self.to_hex())
    }
}
