//! Signature errors

use blobref_format::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("Malformed signature: expected 65 bytes, found {found}")]
    MalformedSignature { found: usize },

    #[error("Invalid recovery id: {0} (accepted: 0, 1, 27, 28)")]
    InvalidRecoveryId(u8),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, SignatureError>;
