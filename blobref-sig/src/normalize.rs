//! Recovery id normalization and compact conversion

use crate::error::{Result, SignatureError};
use crate::signature::{CompactSignature, RecoverableSignature, LEGACY_V_OFFSET};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How to interpret the recovery indicator `v`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryMode {
    /// Subtract 27 when `v >= 27`, then take the low bit. Never fails.
    #[default]
    Lenient,
    /// Accept only `0`, `1`, `27` and `28`
    Strict,
}

impl RecoveryMode {
    /// Normalize `v` to a parity bit
    pub fn parity(self, v: u8) -> Result<u8> {
        match self {
            RecoveryMode::Lenient => {
                let normalized = if v >= LEGACY_V_OFFSET { v - LEGACY_V_OFFSET } else { v };
                if normalized > 1 {
                    debug!(v, "non-canonical recovery id");
                }
                Ok(normalized & 1)
            }
            RecoveryMode::Strict => match v {
                0 | 27 => Ok(0),
                1 | 28 => Ok(1),
                other => Err(SignatureError::InvalidRecoveryId(other)),
            },
        }
    }
}

impl RecoverableSignature {
    /// Fold the recovery parity into `s`
    pub fn to_compact(&self, mode: RecoveryMode) -> Result<CompactSignature> {
        let parity = mode.parity(self.v)?;
        Ok(CompactSignature::from_parts(&self.r, &self.s, parity))
    }
}

/// Convert a 65-byte recoverable signature to the 64-byte compact form
///
/// Both the `{27, 28}` and `{0, 1}` conventions are accepted.
///
/// # Errors
/// - [`SignatureError::MalformedSignature`] unless `signature` is exactly 65 bytes
pub fn to_compact(signature: &[u8]) -> Result<CompactSignature> {
    to_compact_with(signature, RecoveryMode::Lenient)
}

/// Convert with an explicit recovery mode
pub fn to_compact_with(signature: &[u8], mode: RecoveryMode) -> Result<CompactSignature> {
    RecoverableSignature::from_bytes(signature)?.to_compact(mode)
}
